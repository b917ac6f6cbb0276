//! Environment with polygonal obstacles.

use super::{max, min, sides, HasCollision, LineSegment, Position, Shape, Wall};

#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Environment {
    obstacles: Vec<Obstacle>,
}

impl Environment {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn x_min(&self) -> f64 {
        self.corners()
            .map(|(bottom_left, _)| bottom_left.x())
            .min_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    pub fn x_max(&self) -> f64 {
        self.corners()
            .map(|(_, top_right)| top_right.x())
            .max_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    pub fn y_min(&self) -> f64 {
        self.corners()
            .map(|(bottom_left, _)| bottom_left.y())
            .min_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    pub fn y_max(&self) -> f64 {
        self.corners()
            .map(|(_, top_right)| top_right.y())
            .max_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    fn corners(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.obstacles.iter().filter_map(Obstacle::bounding_box)
    }

    pub fn has_collision(&self, object: &dyn HasCollision) -> bool {
        self.obstacles().iter().any(|o| o.has_collision(object))
    }

    /// Indices of all obstacles colliding with `object`.
    pub fn colliding_obstacles<'a>(
        &'a self,
        object: &'a dyn HasCollision,
    ) -> impl Iterator<Item = usize> + 'a {
        self.obstacles
            .iter()
            .enumerate()
            .filter(move |(_, o)| o.has_collision(object))
            .map(|(idx, _)| idx)
    }

    /// Check if `object` lies within the bounding box of all obstacles.
    pub fn contains(&self, object: &dyn HasCollision) -> bool {
        let (x_min, x_max, y_min, y_max) = (self.x_min(), self.x_max(), self.y_min(), self.y_max());
        let within = |p: &Position| {
            p.x() >= x_min && p.x() <= x_max && p.y() >= y_min && p.y() <= y_max
        };

        match object.shape() {
            Shape::Circle { position, radius } => {
                position.x() - radius >= x_min
                    && position.x() + radius <= x_max
                    && position.y() - radius >= y_min
                    && position.y() + radius <= y_max
            }
            Shape::Polygon { vertices } => vertices.iter().all(within),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Obstacle {
    vertices: Vec<Position>,
}

impl Obstacle {
    pub fn new(vertices: Vec<Position>) -> Self {
        Self { vertices }
    }

    /// Axis-aligned rectangle, vertices counter-clockwise from the bottom left corner.
    pub fn rectangle(position: Position, x_length: f64, y_length: f64) -> Self {
        let x_min = position.x() - x_length / 2.0;
        let x_max = position.x() + x_length / 2.0;
        let y_min = position.y() - y_length / 2.0;
        let y_max = position.y() + y_length / 2.0;
        Self::new(vec![
            Position::new(x_min, y_min),
            Position::new(x_max, y_min),
            Position::new(x_max, y_max),
            Position::new(x_min, y_max),
        ])
    }

    pub fn sides(&self) -> impl Iterator<Item = LineSegment> + '_ {
        sides(&self.vertices)
    }

    /// Bottom left and top right corner of the axis-aligned bounding box.
    pub fn bounding_box(&self) -> Option<(Position, Position)> {
        let (first, rest) = self.vertices.split_first()?;
        Some(rest.iter().fold((*first, *first), |(bottom_left, top_right), v| {
            (
                Position::new(min(bottom_left.x(), v.x()), min(bottom_left.y(), v.y())),
                Position::new(max(top_right.x(), v.x()), max(top_right.y(), v.y())),
            )
        }))
    }
}

impl Wall for Obstacle {
    fn vertices(&self) -> &[Position] {
        &self.vertices
    }
}

impl HasCollision for Obstacle {
    fn shape(&self) -> Shape<'_> {
        Shape::polygon(self)
    }
}
