pub mod core;
pub mod interfaces;
pub mod pre;



#[cfg(test)]
mod waypoint_tests {
    use crate::core::waypoint::{EdgeMode, Waypoint};
    use crate::test_data::DIAG;
    use approx::assert_abs_diff_eq;
    use helpers::general::InputValueError;
    use helpers::geometry::{Point2d, Vector2d};

    fn assert_point_eq(p: &Point2d, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
    }

    #[test]
    fn test_waypoint_empty_id() {
        let err = Waypoint::new("", 0.0, 0.0, 20.0).unwrap_err();
        assert!(err.downcast_ref::<InputValueError>().is_some());
    }
    #[test]
    fn test_waypoint_zero_track_width() {
        let err = Waypoint::new("p1", 0.0, 0.0, 0.0).unwrap_err();
        assert!(err.downcast_ref::<InputValueError>().is_some());
    }
    #[test]
    fn test_waypoint_invalid_track_widths() {
        assert!(Waypoint::new("p1", 0.0, 0.0, -5.0).is_err());
        assert!(Waypoint::new("p1", 0.0, 0.0, f64::NAN).is_err());
        assert!(Waypoint::new("p1", 0.0, 0.0, f64::INFINITY).is_err());
    }
    #[test]
    fn test_waypoint_non_finite_anchor() {
        let err = Waypoint::new("p1", f64::NAN, 0.0, 20.0).unwrap_err();
        assert!(err.downcast_ref::<InputValueError>().is_some());
        assert!(Waypoint::new("p1", 0.0, f64::INFINITY, 20.0).is_err());
        assert!(Waypoint::new("p1", f64::NEG_INFINITY, 0.0, 20.0).is_err());
    }
    #[test]
    fn test_waypoint_accessors() {
        let waypoint = Waypoint::new("p1", 172.0, 600.0, 150.0).unwrap();
        assert_eq!(waypoint.id(), "p1");
        assert_eq!(waypoint.anchor(), &Point2d::new(172.0, 600.0));
        assert_abs_diff_eq!(waypoint.track_width(), 150.0);
        assert_eq!(
            waypoint.to_string(),
            "id=p1 anchor=(172, 600) track_width=150"
        );
    }

    #[test]
    fn test_calc_edges_exact() {
        let prev = Waypoint::new("p1", 0.0, 0.0, 20.0).unwrap();
        let waypoint = Waypoint::new("p2", 100.0, 0.0, 20.0).unwrap();
        let next = Waypoint::new("p3", 100.0, 100.0, 20.0).unwrap();

        // heading is atan2(-100, -100) = -135 deg
        let edges = waypoint.calc_edges(&prev, &next, EdgeMode::Exact);
        assert_point_eq(&edges.inside, 100.0 + DIAG, -DIAG);
        assert_point_eq(&edges.outside, 100.0 - DIAG, DIAG);
    }
    #[test]
    fn test_calc_edges_pixel_truncated() {
        let prev = Waypoint::new("p1", 0.0, 0.0, 20.0).unwrap();
        let waypoint = Waypoint::new("p2", 100.0, 0.0, 20.0).unwrap();
        let next = Waypoint::new("p3", 100.0, 100.0, 20.0).unwrap();

        let edges = waypoint.calc_edges(&prev, &next, EdgeMode::PixelTruncated);
        assert_eq!(edges.inside, Point2d::new(107.0, -7.0));
        assert_eq!(edges.outside, Point2d::new(93.0, 7.0));
    }
    #[test]
    fn test_calc_edges_odd_track_width() {
        let prev = Waypoint::new("p1", 0.0, 0.0, 21.0).unwrap();
        let waypoint = Waypoint::new("p2", 50.0, 0.0, 21.0).unwrap();
        let next = Waypoint::new("p3", 100.0, 0.0, 21.0).unwrap();

        // heading is 180 deg, the edges are straight above and below the anchor
        let edges = waypoint.calc_edges(&prev, &next, EdgeMode::Exact);
        assert_point_eq(&edges.inside, 50.0, -10.5);
        assert_point_eq(&edges.outside, 50.0, 10.5);

        // integer halving drops the remainder
        let edges = waypoint.calc_edges(&prev, &next, EdgeMode::PixelTruncated);
        assert_point_eq(&edges.inside, 50.0, -10.0);
        assert_point_eq(&edges.outside, 50.0, 10.0);
    }
    #[test]
    fn test_calc_edges_rotation_formula() {
        let triples = [
            ((0.0, 0.0), (30.0, 10.0), (50.0, 45.0)),
            ((-20.0, 5.0), (0.0, 0.0), (13.0, -80.0)),
            ((172.0, 600.0), (800.0, 600.0), (834.0, 596.0)),
            ((100.0, 500.0), (120.0, 570.0), (172.0, 600.0)),
        ];

        for &((px, py), (x, y), (nx, ny)) in triples.iter() {
            let prev = Waypoint::new("prev", px, py, 1.0).unwrap();
            let waypoint = Waypoint::new("cur", x, y, 37.0).unwrap();
            let next = Waypoint::new("next", nx, ny, 1.0).unwrap();
            let edges = waypoint.calc_edges(&prev, &next, EdgeMode::Exact);

            // both edges at half the track width, diametrically opposite through the anchor
            assert_abs_diff_eq!(waypoint.anchor().dist(&edges.inside), 18.5, epsilon = 1e-9);
            assert_abs_diff_eq!(waypoint.anchor().dist(&edges.outside), 18.5, epsilon = 1e-9);
            let midpoint = edges.inside.midpoint(&edges.outside);
            assert_point_eq(&midpoint, x, y);

            // inside edge is the heading rotated by +90 deg
            let heading = (py - ny).atan2(px - nx);
            let offset = Vector2d::from_angle(heading + std::f64::consts::FRAC_PI_2).mult(18.5);
            assert_point_eq(&edges.inside, x + offset.dx, y + offset.dy);
        }
    }
    #[test]
    fn test_calc_edges_coincident_neighbors() {
        let neighbor = Waypoint::new("p1", 10.0, 10.0, 4.0).unwrap();
        let waypoint = Waypoint::new("p2", 20.0, 10.0, 4.0).unwrap();

        // heading falls back to 0 deg
        let edges = waypoint.calc_edges(&neighbor, &neighbor, EdgeMode::Exact);
        assert_point_eq(&edges.inside, 20.0, 12.0);
        assert_point_eq(&edges.outside, 20.0, 8.0);
    }
}


#[cfg(test)]
mod track_tests {
    use crate::core::track::Track;
    use crate::core::waypoint::{EdgeMode, Waypoint};
    use crate::test_data::{square_waypoints, DIAG};
    use approx::assert_abs_diff_eq;
    use helpers::general::InputValueError;

    #[test]
    fn test_track_empty() {
        let err = Track::new(vec![], EdgeMode::Exact).unwrap_err();
        assert!(err.downcast_ref::<InputValueError>().is_some());
    }
    #[test]
    fn test_track_resolves_all_waypoints_in_order() {
        let track = Track::new(square_waypoints(), EdgeMode::Exact).unwrap();
        let ids: Vec<&str> = track.waypoints().iter().map(|el| el.id()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
        assert_eq!(track.cursor().len(), 4);
        assert_eq!(track.edge_mode(), EdgeMode::Exact);
    }
    #[test]
    fn test_track_wrap_around_neighbors() {
        let raw = square_waypoints();
        let track = Track::new(square_waypoints(), EdgeMode::Exact).unwrap();

        let expected_first = raw[0].calc_edges(&raw[3], &raw[1], EdgeMode::Exact);
        let expected_last = raw[3].calc_edges(&raw[2], &raw[0], EdgeMode::Exact);
        assert_eq!(track.waypoints()[0].edges(), &expected_first);
        assert_eq!(track.waypoints()[3].edges(), &expected_last);

        // heading at p1 is atan2(100, -100) = 135 deg
        assert_abs_diff_eq!(track.waypoints()[0].edge_inside().x, -DIAG, epsilon = 1e-9);
        assert_abs_diff_eq!(track.waypoints()[0].edge_inside().y, -DIAG, epsilon = 1e-9);
        assert_abs_diff_eq!(track.waypoints()[0].edge_outside().x, DIAG, epsilon = 1e-9);
        assert_abs_diff_eq!(track.waypoints()[0].edge_outside().y, DIAG, epsilon = 1e-9);
    }
    #[test]
    fn test_track_scenario_waypoint() {
        let track = Track::new(square_waypoints(), EdgeMode::Exact).unwrap();
        let waypoint = &track.waypoints()[1];
        assert_abs_diff_eq!(waypoint.edge_inside().x, 107.0710678, epsilon = 1e-6);
        assert_abs_diff_eq!(waypoint.edge_inside().y, -7.0710678, epsilon = 1e-6);
        assert_abs_diff_eq!(waypoint.edge_outside().x, 92.9289322, epsilon = 1e-6);
        assert_abs_diff_eq!(waypoint.edge_outside().y, 7.0710678, epsilon = 1e-6);
    }
    #[test]
    fn test_track_single_waypoint() {
        let waypoint = Waypoint::new("p1", 10.0, 10.0, 4.0).unwrap();
        let track = Track::new(vec![waypoint], EdgeMode::Exact).unwrap();
        assert_eq!(track.waypoints().len(), 1);
        assert_abs_diff_eq!(track.waypoints()[0].edge_inside().y, 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(track.waypoints()[0].edge_outside().y, 8.0, epsilon = 1e-9);
    }
    #[test]
    fn test_track_clockwise() {
        let track = Track::new(square_waypoints(), EdgeMode::Exact).unwrap();
        assert!(track.is_clockwise());

        let mut reversed = square_waypoints();
        reversed.reverse();
        let track = Track::new(reversed, EdgeMode::Exact).unwrap();
        assert!(!track.is_clockwise());
    }
    #[test]
    fn test_track_clockwise_non_convex() {
        // shoelace sum is -1611, i.e. counter-clockwise on screen although most turns go right
        let coords = [(13.0, 94.0), (70.0, 86.0), (53.0, 85.0), (94.0, 15.0), (33.0, 87.0)];
        let waypoints: Vec<Waypoint> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Waypoint::new(&format!("p{}", i + 1), x, y, 5.0).unwrap())
            .collect();

        let track = Track::new(waypoints.clone(), EdgeMode::Exact).unwrap();
        assert!(!track.is_clockwise());

        let mut reversed = waypoints;
        reversed.reverse();
        let track = Track::new(reversed, EdgeMode::Exact).unwrap();
        assert!(track.is_clockwise());

        // L-shaped loop with a concave corner at (100, 100)
        let l_shape = vec![
            Waypoint::new("p1", 0.0, 0.0, 10.0).unwrap(),
            Waypoint::new("p2", 200.0, 0.0, 10.0).unwrap(),
            Waypoint::new("p3", 200.0, 100.0, 10.0).unwrap(),
            Waypoint::new("p4", 100.0, 100.0, 10.0).unwrap(),
            Waypoint::new("p5", 100.0, 200.0, 10.0).unwrap(),
            Waypoint::new("p6", 0.0, 200.0, 10.0).unwrap(),
        ];
        let track = Track::new(l_shape, EdgeMode::Exact).unwrap();
        assert!(track.is_clockwise());
    }
    #[test]
    fn test_track_axes_expansion_square() {
        let track = Track::new(square_waypoints(), EdgeMode::Exact).unwrap();
        let [x_min, x_max, y_min, y_max] = track.get_axes_expansion(50.0);
        assert_abs_diff_eq!(x_min, -50.0 - DIAG, epsilon = 1e-9);
        assert_abs_diff_eq!(x_max, 150.0 + DIAG, epsilon = 1e-9);
        assert_abs_diff_eq!(y_min, -50.0 - DIAG, epsilon = 1e-9);
        assert_abs_diff_eq!(y_max, 150.0 + DIAG, epsilon = 1e-9);
    }
    #[test]
    fn test_track_axes_expansion_widened() {
        let waypoints = vec![
            Waypoint::new("p1", 0.0, 0.0, 10.0).unwrap(),
            Waypoint::new("p2", 300.0, 0.0, 10.0).unwrap(),
            Waypoint::new("p3", 300.0, 100.0, 10.0).unwrap(),
            Waypoint::new("p4", 0.0, 100.0, 10.0).unwrap(),
        ];
        let track = Track::new(waypoints, EdgeMode::Exact).unwrap();
        let [x_min, x_max, y_min, y_max] = track.get_axes_expansion(20.0);

        assert_abs_diff_eq!(x_max - x_min, y_max - y_min, epsilon = 1e-9);
        for waypoint in track.waypoints().iter() {
            for point in [
                waypoint.anchor(),
                waypoint.edge_inside(),
                waypoint.edge_outside(),
            ]
            .iter()
            {
                assert!(x_min + 20.0 <= point.x + 1e-9 && point.x - 1e-9 <= x_max - 20.0);
                assert!(y_min + 20.0 <= point.y + 1e-9 && point.y - 1e-9 <= y_max - 20.0);
            }
        }
    }
}
