use crate::{Point, PositionedNode};

/// An edge joined against its positioned endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEdge {
    pub source: PositionedNode,
    pub target: PositionedNode,
}

impl PositionedEdge {
    /// Stable identifier for rendering keys
    pub fn key(&self) -> String {
        format!("edge_{}_{}", self.source.id, self.target.id)
    }

    /// Start of the drawn line: the source's outgoing anchor
    pub fn start(&self) -> Point {
        self.source.outgoing
    }

    /// End of the drawn line, `clearance` units short of the target's
    /// incoming anchor so the arrowhead marker has room
    pub fn arrow_endpoint(&self, clearance: f32) -> Point {
        trim_segment(self.source.outgoing, self.target.incoming, clearance)
    }
}

/// The point on the segment from `source` to `target` lying `clearance`
/// before `target`
///
/// Anchors closer together than `clearance` collapse onto the target anchor
/// instead of extrapolating past it.
pub fn trim_segment(source: Point, target: Point, clearance: f32) -> Point {
    let length = source.distance(target);
    if length <= clearance {
        return target;
    }
    source.lerp(target, (length - clearance) / length)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    #[test]
    fn trimmed_point_sits_clearance_before_the_target() {
        let source = Point::new(10.0, 20.0);
        let target = Point::new(110.0, 95.0);
        let length = source.distance(target);

        let end = trim_segment(source, target, 3.0);

        assert!((end.distance(target) - 3.0).abs() < TOLERANCE);
        assert!((end.distance(source) - (length - 3.0)).abs() < TOLERANCE);
        // On the segment: the two partial distances add up to the whole
        assert!((end.distance(source) + end.distance(target) - length).abs() < TOLERANCE);
    }

    #[test]
    fn vertical_connector_is_trimmed_straight_down() {
        let source = Point::new(50.0, 10.0);
        let target = Point::new(50.0, 90.0);

        let end = trim_segment(source, target, 3.0);

        assert_eq!(end.x, 50.0);
        assert!((end.y - 87.0).abs() < TOLERANCE);
    }

    #[test]
    fn upward_connector_trims_toward_the_source() {
        let source = Point::new(50.0, 90.0);
        let target = Point::new(50.0, 10.0);

        let end = trim_segment(source, target, 3.0);

        assert!((end.y - 13.0).abs() < TOLERANCE);
    }

    #[test]
    fn anchors_within_clearance_fall_back_to_the_target() {
        let source = Point::new(0.0, 0.0);
        let target = Point::new(1.0, 1.0);

        let end = trim_segment(source, target, 3.0);

        assert_eq!(end, target);
    }

    #[test]
    fn coincident_anchors_produce_no_nan() {
        let anchor = Point::new(42.0, 42.0);

        let end = trim_segment(anchor, anchor, 3.0);

        assert_eq!(end, anchor);
        assert!(!end.x.is_nan() && !end.y.is_nan());
    }
}
