//! Unit tests for chase-belief.

#[cfg(test)]
mod helpers {
    use chase_core::{NodeId, Point3};
    use chase_graph::{WaypointGraph, WaypointGraphBuilder};

    /// The corridor from the acceptance scenario: A—B—C, 8 units apart,
    /// so with k=4 every traversable corridor has raw weight 0.5.
    pub fn corridor() -> (WaypointGraph, [NodeId; 3]) {
        let mut b = WaypointGraphBuilder::new();
        let a = b.add_node(Point3::new(0.0, 4.0, 0.0));
        let m = b.add_node(Point3::new(8.0, 4.0, 0.0));
        let c = b.add_node(Point3::new(16.0, 4.0, 0.0));
        b.add_edge(a, m);
        b.add_edge(m, c);
        (b.build().unwrap(), [a, m, c])
    }

    /// A denser loop with uneven corridor lengths for stochasticity checks.
    pub fn uneven_loop() -> (WaypointGraph, [NodeId; 4]) {
        let mut b = WaypointGraphBuilder::new();
        let n0 = b.add_node(Point3::new(0.0, 0.0, 0.0));
        let n1 = b.add_node(Point3::new(2.0, 0.0, 0.0));
        let n2 = b.add_node(Point3::new(2.0, 0.0, 12.0));
        let n3 = b.add_node(Point3::new(0.0, 0.0, 30.0));
        b.add_edge(n0, n1);
        b.add_edge(n1, n2);
        b.add_edge(n2, n3);
        b.add_edge(n3, n0);
        (b.build().unwrap(), [n0, n1, n2, n3])
    }
}

// ── Transition model ──────────────────────────────────────────────────────────

#[cfg(test)]
mod transition {
    use chase_core::{NodeId, Point3};
    use chase_graph::WaypointGraphBuilder;
    use crate::{BeliefError, TransitionModel};

    #[test]
    fn rows_sum_to_one() {
        for (graph, _) in [
            {
                let (g, n) = super::helpers::corridor();
                (g, n.to_vec())
            },
            {
                let (g, n) = super::helpers::uneven_loop();
                (g, n.to_vec())
            },
        ] {
            let matrix = TransitionModel::new(4.0).build(&graph).unwrap();
            for from in graph.node_ids() {
                let row = matrix.row(from).unwrap();
                let sum: f64 = row.iter().sum();
                assert!((sum - 1.0).abs() < 1e-9, "row {from} sums to {sum}");
                assert!(row.iter().all(|&p| p >= 0.0), "row {from} has a negative entry");
            }
        }
    }

    #[test]
    fn corridor_weights_match_construction_rule() {
        let (graph, [a, m, c]) = super::helpers::corridor();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();

        // Row A: raw weight to M = min(1, 4/8) = 0.5, degree 1, so the
        // diagonal absorbs 1 - 0.5/1 = 0.5; total 1.0 → [0.5, 0.5, 0].
        assert!((matrix.prob(a, m) - 0.5).abs() < 1e-12);
        assert!((matrix.prob(a, a) - 0.5).abs() < 1e-12);
        assert_eq!(matrix.prob(a, c), 0.0);

        // Row M: weights 0.5 to each end, degree 2, diagonal = 1 - 1.0/2 =
        // 0.5; total 1.5 → [1/3, 1/3, 1/3].
        assert!((matrix.prob(m, a) - 1.0 / 3.0).abs() < 1e-12);
        assert!((matrix.prob(m, m) - 1.0 / 3.0).abs() < 1e-12);
        assert!((matrix.prob(m, c) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn short_corridor_weight_caps_at_one() {
        let mut b = WaypointGraphBuilder::new();
        let a = b.add_node(Point3::new(0.0, 0.0, 0.0));
        let c = b.add_node(Point3::new(1.0, 0.0, 0.0)); // distance 1 << k
        b.add_edge(a, c);
        let graph = b.build().unwrap();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();
        // Raw weight min(1, 4/1) = 1, diagonal 0 → the row is a pure move.
        assert!((matrix.prob(a, c) - 1.0).abs() < 1e-12);
        assert_eq!(matrix.prob(a, a), 0.0);
    }

    #[test]
    fn zero_distance_pair_is_clamped_and_flagged() {
        let mut b = WaypointGraphBuilder::new();
        let a = b.add_node(Point3::new(5.0, 0.0, 5.0));
        let c = b.add_node(Point3::new(5.0, 9.0, 5.0)); // same planar spot
        b.add_edge(a, c);
        let graph = b.build().unwrap();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();

        assert_eq!(matrix.degenerate_pairs(), &[(a, c), (c, a)]);
        // Clamped weight 1 behaves like the short-corridor cap.
        assert!((matrix.prob(a, c) - 1.0).abs() < 1e-12);
        let sum: f64 = matrix.row(a).unwrap().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_rate_rejected() {
        let (graph, _) = super::helpers::corridor();
        for k in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TransitionModel::new(k).build(&graph),
                Err(BeliefError::InvalidRate(_))
            ));
        }
    }

    #[test]
    fn determinism() {
        let (graph, _) = super::helpers::uneven_loop();
        let m1 = TransitionModel::new(4.0).build(&graph).unwrap();
        let m2 = TransitionModel::new(4.0).build(&graph).unwrap();
        for from in graph.node_ids() {
            assert_eq!(m1.row(from).unwrap(), m2.row(from).unwrap());
        }
    }

    #[test]
    fn out_of_range_row_fails() {
        let (graph, _) = super::helpers::corridor();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();
        assert!(matches!(
            matrix.row(NodeId(17)),
            Err(BeliefError::DimensionMismatch { .. })
        ));
    }
}

// ── Observation operators ─────────────────────────────────────────────────────

#[cfg(test)]
mod observation {
    use chase_core::NodeId;
    use crate::{BeliefError, ObservationOperator};

    #[test]
    fn constructors() {
        let no_info = ObservationOperator::uninformative(3);
        assert_eq!(no_info.weights(), &[1.0, 1.0, 1.0]);

        let sighted = ObservationOperator::sighted_at(NodeId(1), 3).unwrap();
        assert_eq!(sighted.weights(), &[0.0, 1.0, 0.0]);

        let searched = ObservationOperator::ruled_out(&[NodeId(0), NodeId(2)], 3).unwrap();
        assert_eq!(searched.weights(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn out_of_range_node_fails() {
        assert!(matches!(
            ObservationOperator::sighted_at(NodeId(9), 3),
            Err(BeliefError::Graph(_))
        ));
        assert!(matches!(
            ObservationOperator::ruled_out(&[NodeId(9)], 3),
            Err(BeliefError::Graph(_))
        ));
    }

    #[test]
    fn from_weights_clamps_and_sanitizes() {
        let op = ObservationOperator::from_weights(vec![-0.5, 0.25, 7.0, f64::NAN]);
        assert_eq!(op.weights(), &[0.0, 0.25, 1.0, 0.0]);
        assert_eq!(op.weight(NodeId(99)), 0.0);
    }
}

// ── Belief filter ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use chase_core::NodeId;
    use crate::{
        BeliefError, BeliefFilter, BeliefState, ObservationOperator, TransitionModel,
    };

    #[test]
    fn uniform_and_certain_priors() {
        let u = BeliefState::uniform(4);
        assert!((u.total_mass() - 1.0).abs() < 1e-12);
        assert!(u.probs().iter().all(|&p| (p - 0.25).abs() < 1e-12));

        let c = BeliefState::certain(NodeId(2), 4).unwrap();
        assert_eq!(c.prob(NodeId(2)), 1.0);
        assert_eq!(c.argmax(), Some(NodeId(2)));
        assert!(BeliefState::certain(NodeId(9), 4).is_err());
    }

    /// The acceptance scenario: A—B—C, k=4, uniform prior, all-ones
    /// observation.  The posterior must equal the matrix's stationary
    /// propagation of the prior, verified by direct matrix multiply.
    #[test]
    fn uninformative_tick_equals_direct_propagation() {
        let (graph, _) = super::helpers::corridor();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();

        let prior = BeliefState::uniform(3);
        let mut expected = vec![0.0; 3];
        for j in 0..3 {
            for i in 0..3 {
                expected[j] += prior.probs()[i] * matrix.prob(NodeId(i as u32), NodeId(j as u32));
            }
        }

        let mut filter = BeliefFilter::new(matrix, prior).unwrap();
        let posterior = filter.tick(&ObservationOperator::uninformative(3)).unwrap();

        for (got, want) in posterior.probs().iter().zip(&expected) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
        assert!((posterior.total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn posterior_is_normalized_and_non_negative() {
        let (graph, [n0, ..]) = super::helpers::uneven_loop();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();
        let mut filter = BeliefFilter::with_uniform_prior(matrix);

        let partial =
            ObservationOperator::from_weights(vec![0.9, 0.1, 0.5, 0.0]);
        for _ in 0..50 {
            let belief = filter.tick(&partial).unwrap();
            assert!((belief.total_mass() - 1.0).abs() < 1e-9);
            assert!(belief.probs().iter().all(|&p| p >= 0.0));
        }
        // Mass should have drifted toward the heavily weighted node.
        assert!(filter.belief().prob(n0) > 0.25);
    }

    #[test]
    fn one_hot_observation_collapses_any_prior() {
        let (graph, [_, _, _, n3]) = super::helpers::uneven_loop();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();

        for prior in [
            BeliefState::uniform(4),
            BeliefState::certain(NodeId(0), 4).unwrap(),
        ] {
            let mut filter = BeliefFilter::new(matrix.clone(), prior).unwrap();
            let sighted = ObservationOperator::sighted_at(n3, 4).unwrap();
            let posterior = filter.tick(&sighted).unwrap();
            assert!((posterior.prob(n3) - 1.0).abs() < 1e-12);
            assert_eq!(posterior.argmax(), Some(n3));
        }
    }

    #[test]
    fn all_zero_observation_is_degenerate_and_preserves_state() {
        let (graph, _) = super::helpers::corridor();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();
        let mut filter = BeliefFilter::with_uniform_prior(matrix);

        let before = filter.belief().clone();
        let nothing = ObservationOperator::from_weights(vec![0.0, 0.0, 0.0]);
        assert!(matches!(filter.tick(&nothing), Err(BeliefError::DegenerateBelief)));
        assert_eq!(filter.belief(), &before);

        // Recovery: the uninformative fallback ticks cleanly.
        let recovered = filter.tick(&ObservationOperator::uninformative(3)).unwrap();
        assert!((recovered.total_mass() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dimension_mismatches_rejected() {
        let (graph, _) = super::helpers::corridor();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();

        assert!(matches!(
            BeliefFilter::new(matrix.clone(), BeliefState::uniform(5)),
            Err(BeliefError::DimensionMismatch { expected: 3, got: 5 })
        ));

        let mut filter = BeliefFilter::with_uniform_prior(matrix);
        assert!(matches!(
            filter.tick(&ObservationOperator::uninformative(7)),
            Err(BeliefError::DimensionMismatch { expected: 3, got: 7 })
        ));
    }

    /// A one-hot sighting collapses the belief; afterwards prediction
    /// spreads mass only onto the sighted node's neighborhood.
    #[test]
    fn collapse_then_diffuse_respects_topology() {
        let (graph, [a, m, c]) = super::helpers::corridor();
        let matrix = TransitionModel::new(4.0).build(&graph).unwrap();
        let mut filter = BeliefFilter::with_uniform_prior(matrix);

        filter.tick(&ObservationOperator::sighted_at(a, 3).unwrap()).unwrap();
        let after = filter.tick(&ObservationOperator::uninformative(3)).unwrap();

        // From A, one tick reaches only A and M.
        assert!(after.prob(a) > 0.0);
        assert!(after.prob(m) > 0.0);
        assert_eq!(after.prob(c), 0.0);
    }
}
