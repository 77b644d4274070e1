#[cfg(test)]
mod geometry_tests {
    use crate::geometry::{de_casteljau, degree_elevate, elevation_sequence, sample_curve};
    use approx::assert_relative_eq;
    use kurbo::Point;

    fn quadratic() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ]
    }

    #[test]
    fn elevation_adds_one_point_and_keeps_endpoints() {
        let polygon = quadratic();
        let elevated = degree_elevate(&polygon);

        assert_eq!(
            elevated.len(),
            polygon.len() + 1,
            "Elevation should add exactly one point"
        );
        assert_eq!(elevated[0], polygon[0], "First point should be unchanged");
        assert_eq!(
            elevated[elevated.len() - 1],
            polygon[polygon.len() - 1],
            "Last point should be unchanged"
        );
    }

    #[test]
    fn quadratic_elevation_matches_known_values() {
        // Elevating (0,0), (100,0), (100,100) gives
        // Q1 = (1/3)·P0 + (2/3)·P1 and Q2 = (2/3)·P1 + (1/3)·P2
        let elevated = degree_elevate(&quadratic());

        assert_relative_eq!(elevated[1].x, 200.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(elevated[1].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(elevated[2].x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(elevated[2].y, 100.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn linear_elevation_inserts_midpoint() {
        let line = vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)];
        let elevated = degree_elevate(&line);

        assert_eq!(elevated.len(), 3);
        assert_relative_eq!(elevated[1].x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(elevated[1].y, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn elevation_preserves_the_curve() {
        let polygon = quadratic();
        let elevated = degree_elevate(&polygon);
        let twice_elevated = degree_elevate(&elevated);

        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let original = de_casteljau(&polygon, t);
            let once = de_casteljau(&elevated, t);
            let twice = de_casteljau(&twice_elevated, t);

            assert_relative_eq!(original.x, once.x, epsilon = 1e-9);
            assert_relative_eq!(original.y, once.y, epsilon = 1e-9);
            assert_relative_eq!(original.x, twice.x, epsilon = 1e-9);
            assert_relative_eq!(original.y, twice.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn de_casteljau_hits_the_endpoints() {
        let polygon = quadratic();

        let start = de_casteljau(&polygon, 0.0);
        assert_eq!(start, polygon[0], "t = 0 should land on the first point");

        let end = de_casteljau(&polygon, 1.0);
        assert_relative_eq!(end.x, 100.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn sampling_count_is_independent_of_degree() {
        let line = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let polygon = quadratic();

        for samples in [1, 2, 5, 100] {
            assert_eq!(sample_curve(&line, samples).len(), samples + 1);
            assert_eq!(sample_curve(&polygon, samples).len(), samples + 1);
        }
    }

    #[test]
    fn sampling_starts_and_ends_on_the_polygon() {
        let polygon = quadratic();
        let samples = sample_curve(&polygon, 10);

        assert_eq!(samples[0], polygon[0]);
        let last = samples[samples.len() - 1];
        assert_relative_eq!(last.x, 100.0, epsilon = 1e-12);
        assert_relative_eq!(last.y, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn sequence_produces_steps_plus_one_generations() {
        let generations = elevation_sequence(&quadratic(), 3);

        assert_eq!(generations.len(), 4);
        for (step, polygon) in generations.iter().enumerate() {
            assert_eq!(
                polygon.len(),
                3 + step,
                "Each generation should grow by one point"
            );
        }
    }

    #[test]
    fn sequence_with_zero_steps_is_just_the_polygon() {
        let polygon = quadratic();
        let generations = elevation_sequence(&polygon, 0);

        assert_eq!(generations.len(), 1);
        assert_eq!(generations[0], polygon);
    }

    #[test]
    fn negative_step_counts_clamp_to_zero() {
        let generations = elevation_sequence(&quadratic(), -5);
        assert_eq!(generations.len(), 1);
    }

    #[test]
    fn sequence_stops_below_two_points() {
        let single = vec![Point::new(5.0, 5.0)];
        let generations = elevation_sequence(&single, 3);

        assert_eq!(generations.len(), 1, "A lone point cannot be elevated");
    }
}

#[cfg(test)]
mod editor_tests {
    use crate::editor::{EditAction, PointEditor};
    use kurbo::Point;

    fn editor_with_points(points: &[(f64, f64)]) -> PointEditor {
        let mut editor = PointEditor::default();
        for &(x, y) in points {
            let action = editor.pointer_down(Point::new(x, y));
            assert!(
                matches!(action, EditAction::Added(_)),
                "Test points must be far enough apart to all be added"
            );
        }
        editor
    }

    #[test]
    fn click_on_empty_canvas_adds_a_point() {
        let mut editor = PointEditor::default();

        let action = editor.pointer_down(Point::new(50.0, 60.0));
        assert_eq!(action, EditAction::Added(0));
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.points()[0], Point::new(50.0, 60.0));

        // Releasing after an add must not delete anything
        assert_eq!(editor.pointer_up(), EditAction::None);
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn click_and_release_on_a_point_removes_it() {
        let mut editor = editor_with_points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

        // Within the 10px hit margin of the middle point
        let action = editor.pointer_down(Point::new(103.0, 2.0));
        assert_eq!(action, EditAction::Grabbed(1));
        assert_eq!(editor.len(), 3, "Grabbing must not mutate the list");

        let action = editor.pointer_up();
        assert_eq!(action, EditAction::Removed(1));
        assert_eq!(editor.len(), 2);
        assert_eq!(editor.points(), &[Point::new(0.0, 0.0), Point::new(100.0, 100.0)]);
    }

    #[test]
    fn jitter_below_the_drag_threshold_still_removes() {
        let mut editor = editor_with_points(&[(0.0, 0.0), (100.0, 0.0)]);

        editor.pointer_down(Point::new(98.0, 2.0));
        // Under 5px of travel, so the drag is never confirmed
        let action = editor.pointer_move(Point::new(101.0, 1.0));
        assert_eq!(action, EditAction::None);
        assert_eq!(editor.points()[1], Point::new(100.0, 0.0));

        assert_eq!(editor.pointer_up(), EditAction::Removed(1));
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn drag_moves_the_point_and_keeps_it() {
        let mut editor = editor_with_points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

        assert_eq!(editor.pointer_down(Point::new(100.0, 0.0)), EditAction::Grabbed(1));

        let action = editor.pointer_move(Point::new(130.0, 40.0));
        assert_eq!(action, EditAction::Moved(1));
        assert_eq!(editor.points()[1], Point::new(130.0, 40.0));

        // Once confirmed, every move updates the point
        editor.pointer_move(Point::new(150.0, 50.0));
        assert_eq!(editor.points()[1], Point::new(150.0, 50.0));

        assert_eq!(editor.pointer_up(), EditAction::Released(1));
        assert_eq!(editor.len(), 3);
        assert_eq!(editor.points()[1], Point::new(150.0, 50.0));
    }

    #[test]
    fn hit_test_ties_resolve_to_the_lowest_index() {
        let mut editor = editor_with_points(&[(0.0, 0.0), (16.0, 0.0)]);

        // (8, 0) is within the hit margin of both points
        let action = editor.pointer_down(Point::new(8.0, 0.0));
        assert_eq!(action, EditAction::Grabbed(0));
    }

    #[test]
    fn move_without_a_press_is_a_noop() {
        let mut editor = editor_with_points(&[(0.0, 0.0)]);

        assert_eq!(editor.pointer_move(Point::new(50.0, 50.0)), EditAction::None);
        assert_eq!(editor.points()[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn clear_removes_everything() {
        let mut editor = editor_with_points(&[(0.0, 0.0), (100.0, 0.0)]);

        editor.clear();
        assert!(editor.is_empty());

        // Clearing an empty editor is a no-op
        editor.clear();
        assert_eq!(editor.len(), 0);
    }
}

#[cfg(test)]
mod cli_tests {
    use crate::cli::parse_steps;

    #[test]
    fn valid_step_counts_pass_through() {
        assert_eq!(parse_steps("3"), 3);
        assert_eq!(parse_steps("  7 "), 7);
        assert_eq!(parse_steps("0"), 0);
    }

    #[test]
    fn invalid_input_is_treated_as_zero() {
        assert_eq!(parse_steps("abc"), 0);
        assert_eq!(parse_steps(""), 0);
        assert_eq!(parse_steps("3.5"), 0);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(parse_steps("-3"), 0);
    }
}

#[cfg(test)]
mod settings_tests {
    use crate::hud::DisplaySettings;

    #[test]
    fn set_steps_clamps_negative_values() {
        let mut settings = DisplaySettings::default();

        settings.set_steps(4);
        assert_eq!(settings.elevation_steps, 4);

        settings.set_steps(-2);
        assert_eq!(settings.elevation_steps, 0);
    }
}
