use super::*;
use crate::types::Config;
use tempfile::tempdir;

fn create_test_grid(names: &[&str]) -> Grid {
    Grid::from_state(PersistedState {
        containers: names.iter().map(|n| Container::named(*n)).collect(),
        window_bounds: None,
    })
}

fn create_test_icons(temp: &tempfile::TempDir) -> IconCache {
    IconCache::new(Config::new(temp.path()).icons_dir())
}

mod state {
    use super::*;

    #[test]
    fn test_from_state_appends_marker_last() {
        let grid = create_test_grid(&["Tools", "Games"]);

        assert_eq!(grid.containers().len(), 3);
        assert!(grid.containers().last().unwrap().is_add_marker());
        assert_eq!(grid.containers()[0].name, "Tools");
    }

    #[test]
    fn test_to_state_strips_marker() {
        let grid = create_test_grid(&["Tools"]);
        let state = grid.to_state();

        assert_eq!(state.containers.len(), 1);
        assert!(state.containers.iter().all(|c| !c.is_add_marker()));
    }

    #[test]
    fn test_window_bounds_survive_round_trip() {
        let bounds = WindowBounds {
            left: 1,
            top: 2,
            width: 3,
            height: 4,
        };
        let mut grid = create_test_grid(&[]);
        grid.set_window_bounds(Some(bounds));

        assert_eq!(grid.to_state().window_bounds, Some(bounds));
    }

    #[test]
    fn test_find_ignores_marker() {
        let grid = create_test_grid(&["Tools"]);
        assert_eq!(grid.find("Tools"), Some(0));
        assert_eq!(grid.find(""), None);
        assert_eq!(grid.find("Missing"), None);
    }
}

mod add_container {
    use super::*;

    #[test]
    fn test_inserted_before_marker_with_counted_name() {
        let mut grid = create_test_grid(&["Tools"]);

        // One container plus the marker makes two tiles
        let index = grid.add_container();

        assert_eq!(index, 1);
        assert_eq!(grid.containers()[1].name, "Container 2");
        assert!(grid.containers().last().unwrap().is_add_marker());
    }

    #[test]
    fn test_named_container() {
        let mut grid = create_test_grid(&[]);
        let index = grid.add_named_container("Work");

        assert_eq!(grid.containers()[index].name, "Work");
        assert!(grid.containers().last().unwrap().is_add_marker());
    }
}

mod add_entries {
    use super::*;

    #[test]
    fn test_entries_get_stem_display_names() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&["Tools"]);

        let added = grid.add_entries(
            0,
            &["/opt/editor.exe".into(), "/opt/term".into()],
            &icons,
        );

        assert_eq!(added, 2);
        let entries = &grid.containers()[0].entries;
        assert_eq!(entries[0].display_name, "editor");
        assert_eq!(entries[1].display_name, "term");
    }

    #[test]
    fn test_duplicate_paths_suppressed_case_insensitively() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&["Tools"]);

        grid.add_entries(0, &["/Opt/Editor.EXE".into()], &icons);
        let added = grid.add_entries(0, &["/opt/editor.exe".into()], &icons);

        assert_eq!(added, 0);
        assert_eq!(grid.containers()[0].entries.len(), 1);
    }

    #[test]
    fn test_same_path_allowed_in_other_container() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&["A", "B"]);

        grid.add_entries(0, &["/opt/editor".into()], &icons);
        let added = grid.add_entries(1, &["/opt/editor".into()], &icons);

        assert_eq!(added, 1);
    }

    #[test]
    fn test_image_drop_gets_cached_icon() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let source = temp.path().join("shot.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 255]))
            .save(&source)
            .unwrap();

        let mut grid = create_test_grid(&["Tools"]);
        grid.add_entries(0, &[source], &icons);

        let icon = grid.containers()[0].entries[0].icon_path.clone().unwrap();
        assert!(icon.exists());
    }

    #[test]
    fn test_non_image_drop_keeps_no_icon() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&["Tools"]);

        grid.add_entries(0, &["/usr/bin/true".into()], &icons);

        assert_eq!(grid.containers()[0].entries[0].icon_path, None);
    }

    #[test]
    fn test_marker_accepts_no_entries() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&[]);

        let added = grid.add_entries(0, &["/opt/editor".into()], &icons);

        assert_eq!(added, 0);
        assert!(grid.containers()[0].entries.is_empty());
    }
}

mod remove_entry {
    use super::*;

    #[test]
    fn test_removes_entry_and_its_icon() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let source = temp.path().join("shot.png");
        image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 255]))
            .save(&source)
            .unwrap();

        let mut grid = create_test_grid(&["Tools"]);
        grid.add_entries(0, &[source], &icons);
        let icon = grid.containers()[0].entries[0].icon_path.clone().unwrap();

        let removed = grid.remove_entry(0, 0).unwrap();

        assert_eq!(removed.display_name, "shot");
        assert!(grid.containers()[0].entries.is_empty());
        assert!(!icon.exists());
    }

    #[test]
    fn test_out_of_range_returns_none() {
        let mut grid = create_test_grid(&["Tools"]);
        assert!(grid.remove_entry(0, 0).is_none());
        assert!(grid.remove_entry(5, 0).is_none());
    }
}

mod edit_mode {
    use super::*;

    #[test]
    fn test_entering_is_exclusive_across_containers() {
        let mut grid = create_test_grid(&["A", "B"]);

        assert!(grid.enter_edit_mode(0));
        assert!(grid.enter_edit_mode(1));

        assert!(!grid.containers()[0].edit_mode);
        assert!(grid.containers()[1].edit_mode);
        assert_eq!(grid.editing(), Some(1));
    }

    #[test]
    fn test_marker_never_enters_edit_mode() {
        let mut grid = create_test_grid(&["A"]);
        let marker = grid.containers().len() - 1;

        assert!(!grid.enter_edit_mode(marker));
        assert_eq!(grid.editing(), None);
    }

    #[test]
    fn test_leave_reports_whether_anything_changed() {
        let mut grid = create_test_grid(&["A"]);

        assert!(!grid.leave_edit_mode());

        grid.enter_edit_mode(0);
        assert!(grid.leave_edit_mode());
        assert_eq!(grid.editing(), None);
    }

    #[test]
    fn test_activation_in_edit_mode_removes_entry() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&["Tools"]);
        grid.add_entries(0, &["/opt/editor".into()], &icons);

        grid.enter_edit_mode(0);
        let action = grid.activate_entry(0, 0).unwrap();

        match action {
            Activation::Removed(entry) => assert_eq!(entry.display_name, "editor"),
            other => panic!("expected removal, got {other:?}"),
        }
        assert!(grid.containers()[0].entries.is_empty());
    }

    #[test]
    fn test_activation_in_normal_mode_requests_launch() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&["Tools"]);
        grid.add_entries(0, &["/opt/editor".into()], &icons);

        assert_eq!(grid.activate_entry(0, 0), Some(Activation::Launch));
        assert_eq!(grid.containers()[0].entries.len(), 1);
    }

    #[test]
    fn test_entry_flags_mirror_container_state() {
        let temp = tempdir().unwrap();
        let icons = create_test_icons(&temp);
        let mut grid = create_test_grid(&["Tools"]);
        grid.add_entries(0, &["/opt/editor".into()], &icons);

        grid.enter_edit_mode(0);
        assert!(grid.containers()[0].entries[0].edit_mode);

        grid.leave_edit_mode();
        assert!(!grid.containers()[0].entries[0].edit_mode);
    }
}
