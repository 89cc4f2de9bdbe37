use crate::domain::ports::SalesOutput;
use crate::utils::error::{Result, SolidError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest integer an f64 can represent exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlOutput;

impl SalesOutput for HtmlOutput {
    fn output(&self, sales: f64) -> Result<String> {
        Ok(format!("<h1>Sales: {}</h1>", sales))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOutput;

impl JsonOutput {
    // Whole amounts serialize as integers (`556`, not `556.0`).
    fn sales_number(sales: f64) -> Result<serde_json::Number> {
        if sales.fract() == 0.0 && sales.abs() <= MAX_EXACT_INTEGER {
            return Ok(serde_json::Number::from(sales as i64));
        }
        serde_json::Number::from_f64(sales).ok_or_else(|| {
            SolidError::validation(format!("sales total must be finite, got {}", sales))
        })
    }
}

impl SalesOutput for JsonOutput {
    fn output(&self, sales: f64) -> Result<String> {
        let body = serde_json::json!({ "sales": Self::sales_number(sales)? });
        Ok(serde_json::to_string(&body)?)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOutput;

impl SalesOutput for CsvOutput {
    fn output(&self, sales: f64) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(["Sales"])?;
        writer.write_record([sales.to_string()])?;

        let bytes = writer
            .into_inner()
            .map_err(|e| SolidError::IoError(e.into_error()))?;
        let body = String::from_utf8(bytes)
            .map_err(|e| SolidError::validation(format!("CSV output is not UTF-8: {}", e)))?;

        Ok(body.trim_end_matches('\n').to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn into_output(self) -> Box<dyn SalesOutput> {
        match self {
            OutputFormat::Html => Box::new(HtmlOutput),
            OutputFormat::Json => Box::new(JsonOutput),
            OutputFormat::Csv => Box::new(CsvOutput),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(SolidError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: html, json, csv".to_string(),
            }),
        }
    }
}
