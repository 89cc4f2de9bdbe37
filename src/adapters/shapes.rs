use crate::domain::ports::Shape;
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::validate_dimension;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn name(&self) -> &'static str {
        "square"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn name(&self) -> &'static str {
        "triangle"
    }
}

/// Shape description as it arrives from the command line or a config file.
///
/// Parsed forms: `rect:3x4`, `square:5`, `circle:2`, `triangle:6x4`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
}

impl ShapeSpec {
    pub fn validate(&self) -> Result<()> {
        match *self {
            ShapeSpec::Rectangle { width, height } => {
                validate_dimension("rectangle.width", width)?;
                validate_dimension("rectangle.height", height)
            }
            ShapeSpec::Square { side } => validate_dimension("square.side", side),
            ShapeSpec::Circle { radius } => validate_dimension("circle.radius", radius),
            ShapeSpec::Triangle { base, height } => {
                validate_dimension("triangle.base", base)?;
                validate_dimension("triangle.height", height)
            }
        }
    }

    pub fn into_shape(self) -> Result<Box<dyn Shape>> {
        self.validate()?;
        let shape: Box<dyn Shape> = match self {
            ShapeSpec::Rectangle { width, height } => Box::new(Rectangle::new(width, height)),
            ShapeSpec::Square { side } => Box::new(Square::new(side)),
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)),
            ShapeSpec::Triangle { base, height } => Box::new(Triangle::new(base, height)),
        };
        Ok(shape)
    }
}

fn parse_number(spec: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|e| SolidError::InvalidConfigValueError {
        field: "shape".to_string(),
        value: spec.to_string(),
        reason: format!("'{}' is not a number: {}", raw, e),
    })
}

fn parse_pair(spec: &str, raw: &str) -> Result<(f64, f64)> {
    let (a, b) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| SolidError::InvalidConfigValueError {
            field: "shape".to_string(),
            value: spec.to_string(),
            reason: "expected two dimensions like 3x4".to_string(),
        })?;
    Ok((parse_number(spec, a)?, parse_number(spec, b)?))
}

impl FromStr for ShapeSpec {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, dims) = s.split_once(':').ok_or_else(|| SolidError::InvalidConfigValueError {
            field: "shape".to_string(),
            value: s.to_string(),
            reason: "expected <kind>:<dimensions>, e.g. circle:2".to_string(),
        })?;

        let spec = match kind.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => {
                let (width, height) = parse_pair(s, dims)?;
                ShapeSpec::Rectangle { width, height }
            }
            "square" => ShapeSpec::Square {
                side: parse_number(s, dims)?,
            },
            "circle" => ShapeSpec::Circle {
                radius: parse_number(s, dims)?,
            },
            "triangle" => {
                let (base, height) = parse_pair(s, dims)?;
                ShapeSpec::Triangle { base, height }
            }
            other => {
                return Err(SolidError::InvalidConfigValueError {
                    field: "shape".to_string(),
                    value: s.to_string(),
                    reason: format!("unknown shape kind '{}'", other),
                })
            }
        };

        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        assert_eq!(Rectangle::new(3.0, 4.0).area(), 12.0);
    }

    #[test]
    fn test_circle_area() {
        let area = Circle::new(2.0).area();
        assert!((area - 12.566).abs() < 1e-3, "got {}", area);
    }

    #[test]
    fn test_triangle_area() {
        assert_eq!(Triangle::new(6.0, 4.0).area(), 12.0);
    }

    #[test]
    fn test_square_area() {
        assert_eq!(Square::new(5.0).area(), 25.0);
    }

    #[test]
    fn test_parse_shape_specs() {
        assert_eq!(
            "rect:3x4".parse::<ShapeSpec>().unwrap(),
            ShapeSpec::Rectangle {
                width: 3.0,
                height: 4.0
            }
        );
        assert_eq!(
            "Circle:2".parse::<ShapeSpec>().unwrap(),
            ShapeSpec::Circle { radius: 2.0 }
        );
        assert_eq!(
            "triangle:6X4".parse::<ShapeSpec>().unwrap(),
            ShapeSpec::Triangle {
                base: 6.0,
                height: 4.0
            }
        );
        assert_eq!(
            "square:1.5".parse::<ShapeSpec>().unwrap(),
            ShapeSpec::Square { side: 1.5 }
        );
    }

    #[test]
    fn test_parse_shape_spec_errors() {
        assert!("hexagon:3".parse::<ShapeSpec>().is_err());
        assert!("circle".parse::<ShapeSpec>().is_err());
        assert!("rect:3".parse::<ShapeSpec>().is_err());
        assert!("circle:abc".parse::<ShapeSpec>().is_err());
        assert!("circle:-2".parse::<ShapeSpec>().is_err());
    }

    #[test]
    fn test_spec_into_shape() {
        let shape = ShapeSpec::Triangle {
            base: 6.0,
            height: 4.0,
        }
        .into_shape()
        .unwrap();
        assert_eq!(shape.name(), "triangle");
        assert_eq!(shape.area(), 12.0);

        assert!(ShapeSpec::Circle { radius: f64::NAN }.into_shape().is_err());
    }
}
