use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::BotError;

/// Review states the Practicum API reports for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }
}

/// The fields of a homework record the bot cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
}

/// A response that passed [`check_response`].
#[derive(Debug, Clone, Copy)]
pub struct CheckedResponse<'a> {
    pub homeworks: &'a [Value],
    pub current_date: &'a Value,
}

impl CheckedResponse<'_> {
    /// Server time to use as the next `from_date`.
    pub fn watermark(&self) -> Result<i64, BotError> {
        self.current_date
            .as_i64()
            .ok_or(BotError::TypeMismatch("Ключ 'current_date' не является целым числом."))
    }
}

/// Make sure the API answer looks like the documented contract and hand back
/// the list of homeworks.
pub fn check_response(response: &Value) -> Result<CheckedResponse<'_>, BotError> {
    let object = response
        .as_object()
        .ok_or(BotError::TypeMismatch("Ответ API не соответствует типу данных."))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(BotError::MissingResponseKey("homeworks"))?;
    let current_date = object
        .get("current_date")
        .ok_or(BotError::MissingResponseKey("current_date"))?;

    let homeworks = homeworks
        .as_array()
        .ok_or(BotError::TypeMismatch("Ответ API не является списком."))?;

    Ok(CheckedResponse {
        homeworks,
        current_date,
    })
}

// null, false, 0, "" and empty containers all count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Turn one homework record into the chat message announcing its new status.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let record = homework
        .as_object()
        .ok_or(BotError::TypeMismatch("'homework' не соответствует типу данных."))?;

    for key in ["homework_name", "status"] {
        if record.get(key).map_or(true, is_blank) {
            return Err(BotError::MissingHomeworkKey(key));
        }
    }

    let homework = Homework::deserialize(homework)
        .map_err(|_| BotError::TypeMismatch("Поля 'homework' не являются строками."))?;
    let status: HomeworkStatus = homework.status.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_check_response_returns_homeworks() {
        let response = json!({
            "homeworks": [{"homework_name": "Proj1", "status": "approved"}],
            "current_date": 1700000000
        });
        let checked = check_response(&response).unwrap();
        assert_eq!(checked.homeworks.len(), 1);
        assert_eq!(checked.watermark().unwrap(), 1700000000);
    }

    #[test]
    fn test_check_response_not_an_object() {
        let err = check_response(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_check_response_missing_homeworks() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingKey);
        assert!(matches!(err, BotError::MissingResponseKey("homeworks")));
    }

    #[test]
    fn test_check_response_missing_current_date() {
        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingKey);
        assert!(matches!(err, BotError::MissingResponseKey("current_date")));
    }

    #[test]
    fn test_check_response_homeworks_not_a_list() {
        for bad in [json!("Proj1"), json!(17), json!({"homework_name": "Proj1"})] {
            let response = json!({"homeworks": bad, "current_date": 1});
            let err = check_response(&response).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        }
    }

    #[test]
    fn test_watermark_requires_integer() {
        let response = json!({"homeworks": [], "current_date": "yesterday"});
        let checked = check_response(&response).unwrap();
        assert_eq!(checked.watermark().unwrap_err().kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_parse_status_approved() {
        let message = parse_status(&json!({"homework_name": "Proj1", "status": "approved"}))
            .unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"Proj1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_parse_status_every_known_status() {
        for (status, verdict) in [
            ("approved", HomeworkStatus::Approved.verdict()),
            ("reviewing", HomeworkStatus::Reviewing.verdict()),
            ("rejected", HomeworkStatus::Rejected.verdict()),
        ] {
            let message =
                parse_status(&json!({"homework_name": "hw.zip", "status": status})).unwrap();
            assert!(message.ends_with(verdict), "{}", message);
        }
    }

    #[test]
    fn test_parse_status_unknown_status() {
        let err = parse_status(&json!({"homework_name": "Proj1", "status": "unknown_status"}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownStatus);
        assert!(err.to_string().contains("unknown_status"));
    }

    #[test]
    fn test_parse_status_missing_keys_in_order() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert!(matches!(err, BotError::MissingHomeworkKey("homework_name")));

        let err = parse_status(&json!({"homework_name": "Proj1", "status": ""})).unwrap_err();
        assert!(matches!(err, BotError::MissingHomeworkKey("status")));

        // Both absent: the name is reported first.
        let err = parse_status(&json!({"homework_name": null})).unwrap_err();
        assert!(matches!(err, BotError::MissingHomeworkKey("homework_name")));
    }

    #[test]
    fn test_parse_status_not_an_object() {
        let err = parse_status(&json!("Proj1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_parse_status_non_string_fields() {
        let err = parse_status(&json!({"homework_name": 42, "status": "approved"})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);

        let err = parse_status(&json!({"homework_name": "Proj1", "status": ["approved"]}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_parse_status_is_pure() {
        let homework = json!({"homework_name": "Proj1", "status": "reviewing", "id": 7});
        let first = parse_status(&homework).unwrap();
        let second = parse_status(&homework).unwrap();
        assert_eq!(first, second);
    }
}
