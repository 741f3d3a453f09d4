//! Accumulators that receive emitted points.
use glam::DVec3;

/// Receives one weighted point per emit call.
///
/// Sinks accumulate: a host combining several samplers expects each to add its
/// contribution on top of what is already there.
pub trait PointSink {
    fn add_point(&mut self, delta: DVec3);
}

impl PointSink for DVec3 {
    #[inline]
    fn add_point(&mut self, delta: DVec3) {
        *self += delta;
    }
}

impl PointSink for mint::Vector3<f64> {
    #[inline]
    fn add_point(&mut self, delta: DVec3) {
        self.x += delta.x;
        self.y += delta.y;
        self.z += delta.z;
    }
}

impl PointSink for [f64; 3] {
    #[inline]
    fn add_point(&mut self, delta: DVec3) {
        self[0] += delta.x;
        self[1] += delta.y;
        self[2] += delta.z;
    }
}

/// Collects every point instead of summing them.
impl PointSink for Vec<DVec3> {
    #[inline]
    fn add_point(&mut self, delta: DVec3) {
        self.push(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinks_accumulate() {
        let delta = DVec3::new(0.5, -1.0, 2.0);

        let mut v = DVec3::ONE;
        v.add_point(delta);
        v.add_point(delta);
        assert_eq!(v, DVec3::new(2.0, -1.0, 5.0));

        let mut m = mint::Vector3::from([1.0, 1.0, 1.0]);
        m.add_point(delta);
        assert_eq!(<[f64; 3]>::from(m), [1.5, 0.0, 3.0]);

        let mut a = [0.0; 3];
        a.add_point(delta);
        assert_eq!(a, [0.5, -1.0, 2.0]);

        let mut all = Vec::new();
        all.add_point(delta);
        all.add_point(DVec3::ZERO);
        assert_eq!(all, vec![delta, DVec3::ZERO]);
    }
}
