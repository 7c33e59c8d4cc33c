//! Unit tests for chase-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let n = NodeId(7);
        assert_eq!(n.index(), 7);
        assert_eq!(NodeId::try_from(7usize).unwrap(), n);
    }

    #[test]
    fn invalid_sentinel_is_default() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn ordering_follows_inner() {
        assert!(NodeId(1) < NodeId(2));
        assert!(NodeId(2) < NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::wrap_signed_deg;
    use crate::Point3;

    #[test]
    fn planar_distance_is_manhattan_and_ignores_y() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 50.0, -4.0);
        assert_eq!(a.planar_distance(b), 7.0);
        assert_eq!(b.planar_distance(a), 7.0);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        // +z is yaw 0.
        assert!((origin.bearing_to(Point3::new(0.0, 0.0, 10.0))).abs() < 1e-12);
        // +x is yaw -90 (the environment's clockwise-positive convention).
        assert!((origin.bearing_to(Point3::new(10.0, 0.0, 0.0)) + 90.0).abs() < 1e-12);
        // -x is yaw +90.
        assert!((origin.bearing_to(Point3::new(-10.0, 0.0, 0.0)) - 90.0).abs() < 1e-12);
        // -z is dead astern: ±180, wrapped consistently to +180.
        let astern = wrap_signed_deg(origin.bearing_to(Point3::new(0.0, 0.0, -10.0)));
        assert!((astern - 180.0).abs() < 1e-12);
    }

    #[test]
    fn bearing_degenerate_vertical_target() {
        let origin = Point3::new(1.0, 0.0, 1.0);
        assert_eq!(origin.bearing_to(Point3::new(1.0, 30.0, 1.0)), 0.0);
    }

    #[test]
    fn wrap_range_and_boundary() {
        assert_eq!(wrap_signed_deg(-180.0), 180.0);
        assert_eq!(wrap_signed_deg(180.0), 180.0);
        assert_eq!(wrap_signed_deg(540.0), 180.0);
        assert_eq!(wrap_signed_deg(-540.0), 180.0);
        assert!((wrap_signed_deg(-190.0) - 170.0).abs() < 1e-12);
        assert!((wrap_signed_deg(370.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_is_idempotent() {
        for raw in [-720.0, -180.0, -179.9, 0.0, 90.0, 180.0, 359.0, 1000.0] {
            let once = wrap_signed_deg(raw);
            assert!(once > -180.0 && once <= 180.0, "wrap({raw}) = {once} out of range");
            assert_eq!(wrap_signed_deg(once), once);
        }
    }

    #[test]
    fn wrap_tolerates_non_finite() {
        assert_eq!(wrap_signed_deg(f64::NAN), 0.0);
        assert_eq!(wrap_signed_deg(f64::INFINITY), 0.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::AgentRng;

    #[test]
    fn same_seed_replays() {
        let mut a = AgentRng::new(42, 0);
        let mut b = AgentRng::new(42, 0);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn roles_get_independent_streams() {
        let mut seeker = AgentRng::new(42, 0);
        let mut evader = AgentRng::new(42, 1);
        let s: Vec<u32> = (0..16).map(|_| seeker.gen_range(0..1_000_000)).collect();
        let e: Vec<u32> = (0..16).map(|_| evader.gen_range(0..1_000_000)).collect();
        assert_ne!(s, e);
    }

    #[test]
    fn gen_bool_clamps_probability() {
        let mut rng = AgentRng::new(1, 0);
        assert!(!rng.gen_bool(-0.5));
        assert!(rng.gen_bool(2.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(1, 0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod role {
    use crate::Role;

    #[test]
    fn indices_cover_all_roles() {
        assert_eq!(Role::Seeker.index(), 0);
        assert_eq!(Role::Evader.index(), 1);
        assert_eq!(Role::ALL.len(), 2);
    }

    #[test]
    fn opponent_is_involution() {
        for role in Role::ALL {
            assert_eq!(role.opponent().opponent(), role);
        }
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn offset_and_since() {
        let t = Tick(10);
        assert_eq!(t.offset(5), Tick(15));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(t + 1, Tick(11));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}
