//! Slopes, segments and the intersection of infinite lines.

use nalgebra::Vector2;

use super::{max, min, GeometryError, Position};

/// Largest distance of a point from a segment's line that still counts as collinear, relative to
/// the segment length (and absolute for segments shorter than one unit).
pub const COLLINEARITY_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    Finite(f64),
    Vertical,
}

impl Slope {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Slope::Finite(m) if m == 0.0)
    }

    pub fn is_parallel_to(self, other: Slope) -> bool {
        match (self, other) {
            (Slope::Vertical, Slope::Vertical) => true,
            (Slope::Finite(m1), Slope::Finite(m2)) => (m1 - m2).abs() < f64::EPSILON,
            _ => false,
        }
    }
}

/// Slope of the line through `p1` and `p2`.
pub fn slope(p1: Position, p2: Position) -> Result<Slope, GeometryError> {
    if p1 == p2 {
        return Err(GeometryError::DegenerateSegment(p1));
    }

    Ok(if p1.x() == p2.x() {
        Slope::Vertical
    } else {
        Slope::Finite((p2.y() - p1.y()) / (p2.x() - p1.x()))
    })
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LineSegment {
    p1: Position,
    p2: Position,
}

impl LineSegment {
    pub fn new(p1: Position, p2: Position) -> Self {
        Self { p1, p2 }
    }

    pub fn p1(&self) -> Position {
        self.p1
    }

    pub fn p2(&self) -> Position {
        self.p2
    }

    pub fn slope(&self) -> Result<Slope, GeometryError> {
        slope(self.p1, self.p2)
    }

    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    pub fn contains(&self, position: Position) -> bool {
        on_segment(position, self)
    }

    /// Constant term `b` of `y = m * x + b`.
    fn intercept(&self, m: f64) -> f64 {
        self.p1.y() - m * self.p1.x()
    }
}

impl From<(Position, Position)> for LineSegment {
    fn from(value: (Position, Position)) -> Self {
        LineSegment::new(value.0, value.1)
    }
}

/// Check if `point` lies on the finite segment `line`, endpoints included.
pub fn on_segment(point: Position, line: &LineSegment) -> bool {
    let along = Vector2::from(line.p2 - line.p1);
    let offset = Vector2::from(point - line.p1);

    let collinear = if line.is_degenerate() {
        offset.norm() <= COLLINEARITY_EPSILON
    } else {
        let length = along.norm();
        along.perp(&offset).abs() / length <= COLLINEARITY_EPSILON * max(1.0, length)
    };

    collinear
        && point.x() >= min(line.p1.x(), line.p2.x())
        && point.x() <= max(line.p1.x(), line.p2.x())
        && point.y() >= min(line.p1.y(), line.p2.y())
        && point.y() <= max(line.p1.y(), line.p2.y())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Point(Position),
    Parallel,
}

impl Intersection {
    pub fn point(self) -> Option<Position> {
        match self {
            Intersection::Point(position) => Some(position),
            Intersection::Parallel => None,
        }
    }
}

/// Intersection of the infinite lines through both segments.
///
/// The result is not bounded by the segments, use [`on_segment`] to check that.
pub fn point_of_intersection(
    line1: &LineSegment,
    line2: &LineSegment,
) -> Result<Intersection, GeometryError> {
    let slope1 = line1.slope()?;
    let slope2 = line2.slope()?;

    if slope1.is_parallel_to(slope2) {
        return Ok(Intersection::Parallel);
    }

    let intersection = match (slope1, slope2) {
        (Slope::Vertical, Slope::Finite(m2)) => {
            let x = line1.p1.x();
            Position::new(x, m2 * x + line2.intercept(m2))
        }
        (Slope::Finite(m1), Slope::Vertical) => {
            let x = line2.p1.x();
            Position::new(x, m1 * x + line1.intercept(m1))
        }
        (Slope::Finite(m1), Slope::Finite(m2)) => {
            let b1 = line1.intercept(m1);
            let x = (line2.intercept(m2) - b1) / (m1 - m2);
            Position::new(x, m1 * x + b1)
        }
        (Slope::Vertical, Slope::Vertical) => return Ok(Intersection::Parallel),
    };

    Ok(Intersection::Point(intersection))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn segment(p1: (f64, f64), p2: (f64, f64)) -> LineSegment {
        LineSegment::new(p1.into(), p2.into())
    }

    fn distance_to_line(point: Position, line: &LineSegment) -> f64 {
        let along = Vector2::from(line.p2() - line.p1());
        along.perp(&Vector2::from(point - line.p1())).abs() / along.norm()
    }

    #[rstest]
    #[case::up((1.0, 0.0), (1.0, 5.0))]
    #[case::down((-2.0, 3.0), (-2.0, -3.0))]
    #[case::tiny((0.5, 0.0), (0.5, 1e-12))]
    fn test_slope_vertical(#[case] p1: (f64, f64), #[case] p2: (f64, f64)) {
        assert_eq!(slope(p1.into(), p2.into()), Ok(Slope::Vertical));
    }

    #[rstest]
    #[case((0.0, 0.0), (2.0, 1.0), 0.5)]
    #[case((2.0, 1.0), (0.0, 0.0), 0.5)]
    #[case((-1.0, 4.0), (1.0, 0.0), -2.0)]
    #[case((3.0, 7.0), (5.0, 7.0), 0.0)]
    fn test_slope_finite(#[case] p1: (f64, f64), #[case] p2: (f64, f64), #[case] expected: f64) {
        match slope(p1.into(), p2.into()) {
            Ok(Slope::Finite(m)) => assert_abs_diff_eq!(m, expected),
            other => panic!("unexpected slope {other:?}"),
        }
    }

    #[test]
    fn test_slope_degenerate() {
        let p = Position::new(4.0, -1.0);
        assert_eq!(slope(p, p), Err(GeometryError::DegenerateSegment(p)));
    }

    #[test]
    fn test_horizontal_slope_ignores_sign_of_zero() {
        assert!(segment((4.0, 4.0), (0.0, 4.0)).slope().unwrap().is_horizontal());
        assert!(segment((0.0, 4.0), (4.0, 4.0)).slope().unwrap().is_horizontal());
        assert!(!Slope::Vertical.is_horizontal());
    }

    #[rstest]
    #[case::horizontal(segment((0.0, 0.0), (10.0, 0.0)))]
    #[case::vertical(segment((3.0, -1.0), (3.0, 8.0)))]
    #[case::diagonal(segment((0.0, 0.0), (2.0, 2.0)))]
    #[case::steep(segment((-1.0, 4.0), (0.3, -7.7)))]
    #[case::degenerate(segment((2.5, 2.5), (2.5, 2.5)))]
    fn test_on_segment_endpoints(#[case] line: LineSegment) {
        assert!(on_segment(line.p1(), &line));
        assert!(on_segment(line.p2(), &line));
    }

    #[rstest]
    #[case::midpoint((1.0, 1.0), true)]
    #[case::quarter((0.5, 0.5), true)]
    #[case::collinear_beyond_end((3.0, 3.0), false)]
    #[case::collinear_before_start((-0.5, -0.5), false)]
    #[case::off_line((1.0, 1.1), false)]
    #[case::inside_box_off_line((0.5, 1.5), false)]
    fn test_on_segment(#[case] point: (f64, f64), #[case] expected: bool) {
        assert_eq!(
            on_segment(point.into(), &segment((0.0, 0.0), (2.0, 2.0))),
            expected
        );
    }

    #[test]
    fn test_on_segment_tolerates_rounding() {
        let line = segment((0.0, 0.0), (3.0, 0.3));
        let point = Position::new(0.1, 0.1 * 0.1);
        assert!(on_segment(point, &line));
        assert!(line.contains(point));
    }

    #[test]
    fn test_on_segment_degenerate_segment() {
        let line = segment((1.0, 1.0), (1.0, 1.0));
        assert!(line.is_degenerate());
        assert!(!segment((1.0, 1.0), (1.0, 1.0 + 1e-12)).is_degenerate());
        assert!(on_segment(Position::new(1.0, 1.0), &line));
        assert!(!on_segment(Position::new(1.0, 1.5), &line));
    }

    #[rstest]
    #[case::crossing_diagonals(
        segment((0.0, 0.0), (2.0, 2.0)),
        segment((0.0, 2.0), (2.0, 0.0)),
        Position::new(1.0, 1.0)
    )]
    #[case::first_vertical(
        segment((1.0, -5.0), (1.0, 5.0)),
        segment((0.0, 0.0), (2.0, 4.0)),
        Position::new(1.0, 2.0)
    )]
    #[case::second_vertical_outside_segment(
        segment((0.0, 1.0), (4.0, 3.0)),
        segment((2.0, 0.0), (2.0, -1.0)),
        Position::new(2.0, 2.0)
    )]
    #[case::horizontal_and_vertical(
        segment((-3.0, 4.0), (3.0, 4.0)),
        segment((0.0, 0.0), (0.0, 1.0)),
        Position::new(0.0, 4.0)
    )]
    #[case::far_from_both_segments(
        segment((0.0, 0.0), (1.0, 1.0)),
        segment((5.0, 0.0), (6.0, 2.0)),
        Position::new(10.0, 10.0)
    )]
    fn test_point_of_intersection(
        #[case] line1: LineSegment,
        #[case] line2: LineSegment,
        #[case] expected: Position,
    ) {
        let intersection = point_of_intersection(&line1, &line2).unwrap().point().unwrap();
        assert_abs_diff_eq!(intersection, expected, epsilon = EPSILON);
    }

    #[rstest]
    #[case(segment((0.0, 0.0), (3.0, 1.0)), segment((1.0, 5.0), (-2.0, 0.5)))]
    #[case(segment((-7.5, 2.0), (4.0, -3.0)), segment((0.25, 0.25), (1.0, 9.0)))]
    #[case(segment((100.0, 100.0), (101.0, 99.0)), segment((0.0, 0.0), (0.0, 1.0)))]
    #[case(segment((0.1, 0.2), (0.3, 0.7)), segment((0.5, -0.5), (-0.5, 0.9)))]
    fn test_point_of_intersection_lies_on_both_lines(
        #[case] line1: LineSegment,
        #[case] line2: LineSegment,
    ) {
        let intersection = point_of_intersection(&line1, &line2).unwrap().point().unwrap();
        assert_abs_diff_eq!(distance_to_line(intersection, &line1), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(distance_to_line(intersection, &line2), 0.0, epsilon = EPSILON);
    }

    #[rstest]
    #[case::both_vertical(segment((0.0, 0.0), (0.0, 1.0)), segment((3.0, 0.0), (3.0, 5.0)))]
    #[case::same_slope(segment((0.0, 0.0), (2.0, 1.0)), segment((0.0, 1.0), (4.0, 3.0)))]
    #[case::both_horizontal(segment((0.0, 0.0), (1.0, 0.0)), segment((5.0, 2.0), (-1.0, 2.0)))]
    #[case::same_line(segment((0.0, 0.0), (1.0, 1.0)), segment((2.0, 2.0), (3.0, 3.0)))]
    fn test_point_of_intersection_parallel(#[case] line1: LineSegment, #[case] line2: LineSegment) {
        assert_eq!(
            point_of_intersection(&line1, &line2),
            Ok(Intersection::Parallel)
        );
        assert_eq!(
            point_of_intersection(&line2, &line1),
            Ok(Intersection::Parallel)
        );
    }

    #[test]
    fn test_point_of_intersection_degenerate() {
        let line = segment((0.0, 0.0), (1.0, 1.0));
        let point = segment((2.0, 0.0), (2.0, 0.0));
        assert_eq!(
            point_of_intersection(&line, &point),
            Err(GeometryError::DegenerateSegment(Position::new(2.0, 0.0)))
        );
        assert_eq!(
            point_of_intersection(&point, &line),
            Err(GeometryError::DegenerateSegment(Position::new(2.0, 0.0)))
        );
    }
}
