//! JSON output formatting

use crate::engine::executor::ResultData;
use serde_json::{json, Value};

pub fn format_json(result: &ResultData) -> String {
    let data: Value = match result {
        ResultData::Experiment(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Actions(actions) => json!({ "actions": actions }),
        ResultData::Action(info) => serde_json::to_value(info).unwrap_or(json!(null)),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Code, Response};
    use crate::engine::executor::ExperimentResult;

    #[test]
    fn test_experiment_json() {
        let result = ResultData::Experiment(ExperimentResult {
            uid: "abc".to_string(),
            target: "process".to_string(),
            action: "stop".to_string(),
            destroy: false,
            dry_run: true,
            response: Response::fail(Code::IllegalParameters, "less process matcher"),
        });

        let value: Value = serde_json::from_str(&format_json(&result)).unwrap();
        assert_eq!(value["uid"], "abc");
        assert_eq!(value["response"]["code"], "illegal_parameters");
        assert_eq!(value["response"]["message"], "less process matcher");
    }
}
