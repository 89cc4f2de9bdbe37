use crate::core::Shape;

/// Sums areas of any `Shape`. New shapes never require changes here.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, shapes: &[Box<dyn Shape>]) -> f64 {
        shapes.iter().map(|shape| shape.area()).sum()
    }

    pub fn breakdown(&self, shapes: &[Box<dyn Shape>]) -> Vec<(&'static str, f64)> {
        shapes
            .iter()
            .map(|shape| (shape.name(), shape.area()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::shapes::{Circle, Rectangle, Square, Triangle};

    #[test]
    fn test_calculate_mixed_shapes() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(3.0, 4.0)),
            Box::new(Triangle::new(6.0, 4.0)),
            Box::new(Square::new(2.0)),
        ];
        assert_eq!(AreaCalculator::new().calculate(&shapes), 28.0);
    }

    #[test]
    fn test_calculate_empty() {
        assert_eq!(AreaCalculator::new().calculate(&[]), 0.0);
    }

    #[test]
    fn test_breakdown_keeps_order() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(2.0)),
            Box::new(Rectangle::new(3.0, 4.0)),
        ];
        let rows = AreaCalculator::new().breakdown(&shapes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "circle");
        assert!((rows[0].1 - 12.566).abs() < 1e-3);
        assert_eq!(rows[1], ("rectangle", 12.0));
    }

    #[test]
    fn test_custom_shape_needs_no_calculator_change() {
        struct Ellipse {
            a: f64,
            b: f64,
        }

        impl Shape for Ellipse {
            fn area(&self) -> f64 {
                std::f64::consts::PI * self.a * self.b
            }

            fn name(&self) -> &'static str {
                "ellipse"
            }
        }

        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Ellipse { a: 1.0, b: 1.0 }),
            Box::new(Circle::new(1.0)),
        ];
        let total = AreaCalculator::new().calculate(&shapes);
        assert!((total - 2.0 * std::f64::consts::PI).abs() < 1e-9);
    }
}
