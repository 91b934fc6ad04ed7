use colored::Colorize;
use serde::Serialize;
use vk_resolver::{ResolvedResource, ResourceError};

/// One line of `--json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<&'a ResolvedResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorOutput>,
}

#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub code: Option<String>,
    pub message: String,
}

impl<'a> Outcome<'a> {
    pub fn new(input: &'a str, result: &'a Result<ResolvedResource, ResourceError>) -> Self {
        match result {
            Ok(resource) => Self {
                input,
                resource: Some(resource),
                error: None,
            },
            Err(err) => Self {
                input,
                resource: None,
                error: Some(ErrorOutput {
                    code: err.code().map(|c| c.to_string()),
                    message: err.to_string(),
                }),
            },
        }
    }
}

/// Human-readable line for one resolution.
pub fn plain_line(input: &str, result: &Result<ResolvedResource, ResourceError>) -> String {
    match result {
        Ok(resource) => {
            let owner = resource
                .owner_id
                .map(|o| format!(" owner={}", o))
                .unwrap_or_default();
            format!(
                "{} {} {} id={}{} ({})",
                "✓".green(),
                input,
                resource.kind.as_str().bold(),
                resource.id,
                owner,
                resource.to_screen_name().dimmed()
            )
        }
        Err(err) => {
            let code = err
                .code()
                .map(|c| format!("[{}] ", c))
                .unwrap_or_default();
            format!("{} {} {}{}", "✗".red(), input, code.yellow(), err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vk_resolver::ResourceType;

    #[test]
    fn test_json_outcome_for_success() {
        let result = Ok(ResolvedResource::owned(2, -1, "wall"));
        let json = serde_json::to_value(Outcome::new("vk.com/wall-1_2", &result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": "vk.com/wall-1_2",
                "resource": {"id": 2, "ownerId": -1, "type": "wall"}
            })
        );
    }

    #[test]
    fn test_json_outcome_for_error() {
        let result = Err(ResourceError::invalid_url("URL should contain path"));
        let json = serde_json::to_value(Outcome::new("vk.com", &result)).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_URL");
        assert_eq!(json["error"]["message"], "URL should contain path");
        assert!(json.get("resource").is_none());
    }

    #[test]
    fn test_plain_line() {
        colored::control::set_override(false);
        let result = Ok(ResolvedResource::new(1, ResourceType::Group));
        assert_eq!(plain_line("[club1|Label]", &result), "✓ [club1|Label] group id=1 (club1)");

        let result = Err(ResourceError::not_found("nobody"));
        assert_eq!(
            plain_line("nobody", &result),
            "✗ nobody [RESOURCE_NOT_FOUND] Resource not found"
        );
    }
}
