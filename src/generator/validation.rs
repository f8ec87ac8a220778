//! 输入校验与耗时估算

use serde::{Deserialize, Serialize};

use crate::types::research::{DepthLevel, OutputFormat, ResearchRequest, TargetAudience};

const MIN_QUERY_CHARS: usize = 10;

/// 校验结果，所有问题一次性收集
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

fn names<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(as_str).collect()
}

/// 校验调用方传入的原始参数
pub fn validate_inputs(
    query: &str,
    output_format: &str,
    target_audience: &str,
    depth_level: &str,
) -> ValidationReport {
    let mut errors = Vec::new();

    if query.trim().chars().count() < MIN_QUERY_CHARS {
        errors.push(format!(
            "Research query must be at least {} characters long",
            MIN_QUERY_CHARS
        ));
    }
    if output_format.parse::<OutputFormat>().is_err() {
        errors.push(format!(
            "Invalid output format. Available: {:?}",
            names(&OutputFormat::ALL, OutputFormat::as_str)
        ));
    }
    if target_audience.parse::<TargetAudience>().is_err() {
        errors.push(format!(
            "Invalid target audience. Available: {:?}",
            names(&TargetAudience::ALL, TargetAudience::as_str)
        ));
    }
    if depth_level.parse::<DepthLevel>().is_err() {
        errors.push(format!(
            "Invalid depth level. Available: {:?}",
            names(&DepthLevel::ALL, DepthLevel::as_str)
        ));
    }

    ValidationReport::from_errors(errors)
}

/// 校验并转换为强类型请求
pub fn parse_request(
    query: &str,
    output_format: &str,
    target_audience: &str,
    depth_level: &str,
) -> Result<ResearchRequest, ValidationReport> {
    let report = validate_inputs(query, output_format, target_audience, depth_level);
    if !report.valid {
        return Err(report);
    }

    match (
        output_format.parse(),
        target_audience.parse(),
        depth_level.parse(),
    ) {
        (Ok(format), Ok(audience), Ok(depth)) => {
            Ok(ResearchRequest::new(query.trim(), format, audience, depth))
        }
        _ => Err(report),
    }
}

fn base_seconds(depth_level: &str) -> f64 {
    match depth_level {
        "overview" => 300.0,
        "detailed" => 600.0,
        "comprehensive" => 900.0,
        "expert" => 1200.0,
        _ => 600.0,
    }
}

fn format_multiplier(output_format: &str) -> f64 {
    match output_format {
        "executive_briefing" => 0.8,
        "presentation" => 0.9,
        "comprehensive_report" => 1.2,
        "technical_summary" => 1.1,
        "policy_brief" => 1.0,
        _ => 1.0,
    }
}

/// 按静态表估算执行耗时，未知取值使用默认基准
pub fn estimate_duration(depth_level: &str, output_format: &str) -> String {
    let estimated_seconds = (base_seconds(depth_level) * format_multiplier(output_format)) as u64;
    format!("Approximately {} minutes", estimated_seconds / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        let report = validate_inputs(
            "Impact of remote work on productivity",
            "executive_briefing",
            "executive",
            "overview",
        );
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_every_enum_combination_is_valid() {
        for format in OutputFormat::ALL {
            for audience in TargetAudience::ALL {
                for depth in DepthLevel::ALL {
                    let report = validate_inputs(
                        "A sufficiently long query",
                        format.as_str(),
                        audience.as_str(),
                        depth.as_str(),
                    );
                    assert!(report.valid, "{} {} {}", format, audience, depth);
                }
            }
        }
    }

    #[test]
    fn test_errors_are_collected() {
        let report = validate_inputs("short", "blog_post", "professional", "detailed");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(
            report.errors[0],
            "Research query must be at least 10 characters long"
        );
        assert!(report.errors[1].starts_with("Invalid output format. Available: "));
        assert!(report.errors[1].contains("\"policy_brief\""));
    }

    #[test]
    fn test_query_is_trimmed_before_length_check() {
        let report = validate_inputs("   short   ", "presentation", "general", "expert");
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_all_four_errors() {
        let report = validate_inputs("", "x", "y", "z");
        assert_eq!(report.errors.len(), 4);
        assert!(report.errors[2].starts_with("Invalid target audience"));
        assert!(report.errors[3].starts_with("Invalid depth level"));
    }

    #[test]
    fn test_parse_request() {
        let request = parse_request(
            "  Future of solid-state batteries ",
            "technical_summary",
            "technical",
            "expert",
        )
        .unwrap();
        assert_eq!(request.query, "Future of solid-state batteries");
        assert_eq!(request.output_format, OutputFormat::TechnicalSummary);
        assert_eq!(request.depth_level, DepthLevel::Expert);

        let report = parse_request("tiny", "presentation", "general", "expert").unwrap_err();
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_estimate_duration() {
        assert_eq!(
            estimate_duration("expert", "executive_briefing"),
            "Approximately 16 minutes"
        );
        assert_eq!(
            estimate_duration("detailed", "comprehensive_report"),
            "Approximately 12 minutes"
        );
        assert_eq!(
            estimate_duration("overview", "presentation"),
            "Approximately 4 minutes"
        );
    }

    #[test]
    fn test_estimate_duration_defaults() {
        assert_eq!(estimate_duration("unknown", "unknown"), "Approximately 10 minutes");
    }
}
