use crate::numeric::ComplexNumber;
use crate::scene::transform::{PlanePoint, PlaneTransform};

/// Dashed projection vector from one of the two points to the sum marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxVector {
    pub from: PlanePoint,
    pub to: PlanePoint,
}

/// Sum artifacts derived from the live point positions.
///
/// State machine over the point count: below two points there are no sum
/// artifacts; at two or more the sum marker and vector are shown; at
/// exactly two, a pair of auxiliary projection vectors connects each
/// point to the sum. The pair is created on entry into the two-point
/// state, repositioned in place while it lasts, and torn down on exit.
#[derive(Debug)]
pub struct SumState {
    sum: ComplexNumber,
    marker: Option<PlanePoint>,
    aux: Option<[AuxVector; 2]>,
    generation: u64,
}

impl SumState {
    pub fn new() -> Self {
        Self {
            sum: ComplexNumber::Full(0.0, 0.0),
            marker: None,
            aux: None,
            generation: 0,
        }
    }

    /// Recompute synchronously after every add, move, and removal.
    pub fn recompute(&mut self, positions: &[PlanePoint], transform: &PlaneTransform) {
        self.sum = positions.iter().map(|p| transform.to_complex(*p)).sum();
        let sum_position = transform.to_position(&self.sum);

        match positions.len() {
            0 | 1 => {
                self.marker = None;
                self.aux = None;
            }
            2 => {
                self.marker = Some(sum_position);
                match self.aux.as_mut() {
                    Some(aux) => {
                        aux[0].from = positions[0];
                        aux[0].to = sum_position;
                        aux[1].from = positions[1];
                        aux[1].to = sum_position;
                    }
                    None => {
                        self.aux = Some([
                            AuxVector { from: positions[0], to: sum_position },
                            AuxVector { from: positions[1], to: sum_position },
                        ]);
                        self.generation += 1;
                    }
                }
            }
            _ => {
                self.marker = Some(sum_position);
                self.aux = None;
            }
        }
    }

    pub fn sum(&self) -> ComplexNumber {
        self.sum
    }

    /// Canvas position of the sum marker, present with two or more points.
    pub fn marker(&self) -> Option<PlanePoint> {
        self.marker
    }

    pub fn aux_vectors(&self) -> Option<&[AuxVector; 2]> {
        self.aux.as_ref()
    }

    /// Bumped each time the auxiliary pair is created; repositioning
    /// leaves it unchanged.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for SumState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> PlaneTransform {
        PlaneTransform::new(20.0, PlanePoint::new(140.0, 140.0))
    }

    fn at(re: f64, im: f64) -> PlanePoint {
        transform().to_position(&ComplexNumber::cartesian(re, im))
    }

    #[test]
    fn test_no_artifacts_below_two_points() {
        let t = transform();
        let mut state = SumState::new();

        state.recompute(&[], &t);
        assert!(state.marker().is_none());
        assert!(state.aux_vectors().is_none());

        state.recompute(&[at(1.0, 1.0)], &t);
        assert!(state.marker().is_none());
        assert!(state.aux_vectors().is_none());
    }

    #[test]
    fn test_two_points_create_marker_and_aux_pair() {
        let t = transform();
        let mut state = SumState::new();
        state.recompute(&[at(1.0, 0.0), at(0.0, 2.0)], &t);

        assert_eq!(state.sum(), ComplexNumber::Full(1.0, 2.0));
        assert_eq!(state.marker(), Some(at(1.0, 2.0)));

        let aux = state.aux_vectors().unwrap();
        assert_eq!(aux[0].from, at(1.0, 0.0));
        assert_eq!(aux[1].from, at(0.0, 2.0));
        assert_eq!(aux[0].to, at(1.0, 2.0));
        assert_eq!(aux[1].to, at(1.0, 2.0));
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_moves_reposition_without_recreating() {
        let t = transform();
        let mut state = SumState::new();
        state.recompute(&[at(1.0, 0.0), at(0.0, 2.0)], &t);
        assert_eq!(state.generation(), 1);

        // Drag the first point around: the pair survives, its endpoints move.
        for step in 1..=10 {
            let re = 1.0 + step as f64 * 0.1;
            state.recompute(&[at(re, 0.0), at(0.0, 2.0)], &t);
            assert_eq!(state.generation(), 1);
            assert_eq!(state.aux_vectors().unwrap()[0].from, at(re, 0.0));
        }
    }

    #[test]
    fn test_dropping_to_one_point_tears_down() {
        let t = transform();
        let mut state = SumState::new();
        state.recompute(&[at(1.0, 0.0), at(0.0, 2.0)], &t);
        assert!(state.marker().is_some());

        state.recompute(&[at(1.0, 0.0)], &t);
        assert!(state.marker().is_none());
        assert!(state.aux_vectors().is_none());

        // Re-entering the two-point state creates a fresh pair.
        state.recompute(&[at(1.0, 0.0), at(0.0, 2.0)], &t);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_three_points_keep_marker_but_drop_aux() {
        let t = transform();
        let mut state = SumState::new();
        state.recompute(&[at(1.0, 0.0), at(0.0, 2.0)], &t);
        assert!(state.aux_vectors().is_some());

        state.recompute(&[at(1.0, 0.0), at(0.0, 2.0), at(-1.0, -1.0)], &t);
        assert!(state.marker().is_some());
        assert!(state.aux_vectors().is_none());
        assert_eq!(state.sum(), ComplexNumber::Full(0.0, 1.0));
    }
}
