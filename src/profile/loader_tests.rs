//! Tests for file, directory, and glob loading.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::{LoadError, Mode, Profile};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

mod files {
    use super::*;

    #[test]
    fn load_file_parses_and_counts_lines() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "legacy.conf",
            "[Tests]\nStringValue=Now is the time\nStringValue=for all good men\n",
        );

        let mut p = Profile::default();
        let count = p.load_file(dir.path().join("legacy.conf")).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            p.string_values("Tests", "StringValue"),
            ["Now is the time", "for all good men"]
        );
    }

    #[test]
    fn loading_the_same_file_twice_accumulates() {
        let dir = tempdir().unwrap();
        write(dir.path(), "legacy.conf", "[Tests]\nKey=a\n");

        let mut p = Profile::default();
        p.load_file(dir.path().join("legacy.conf")).unwrap();
        p.load_file(dir.path().join("legacy.conf")).unwrap();

        assert_eq!(p.raw_values("Tests", "Key").unwrap(), ["a", "a"]);
    }

    #[test]
    fn missing_file_surfaces_the_os_error() {
        let dir = tempdir().unwrap();

        let mut p = Profile::default();
        let err = p.load_file(dir.path().join("absent.conf")).unwrap_err();

        match &err {
            LoadError::FileRead { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn non_utf8_content_is_a_read_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("binary.conf"), [0x80u8, 0xff, 0xfe]).unwrap();

        let mut p = Profile::default();
        let err = p.load_file(dir.path().join("binary.conf")).unwrap_err();

        assert!(matches!(err, LoadError::FileRead { .. }));
    }
}

mod directories {
    use super::*;

    fn seed_parts(dir: &Path) {
        // Written out of sorted order on purpose; load order must come
        // from the filename sort, not creation order.
        write(
            dir,
            "extended_part2.conf",
            "[Tests]\nId=Default\nStringValue=to come to the aid\nStringValue=of their country!\n",
        );
        write(
            dir,
            "extended_part1.conf",
            "[Tests]\nId=Default\nStringValue=Now is the time\nStringValue=for all good men\n",
        );
        write(dir, "unrelated.txt", "[Nope]\nKey=x\n");
    }

    #[test]
    fn matches_load_in_filename_sorted_order() {
        let dir = tempdir().unwrap();
        seed_parts(dir.path());

        let mut p = Profile::new(Mode::Extended);
        let outcome = p
            .load_directory(dir.path(), "extended_part*.conf")
            .unwrap();

        assert_eq!(outcome.loaded, 2);
        assert!(outcome.errors.is_empty());
        assert_eq!(
            p.string_values_in("Tests", "Default", "StringValue"),
            [
                "Now is the time",
                "for all good men",
                "to come to the aid",
                "of their country!"
            ]
        );
    }

    #[test]
    fn zero_matches_in_a_valid_directory_is_not_an_error() {
        let dir = tempdir().unwrap();
        seed_parts(dir.path());

        let mut p = Profile::default();
        let outcome = p.load_directory(dir.path(), "nothing_*.conf").unwrap();

        assert_eq!(outcome.loaded, 0);
        assert!(outcome.errors.is_empty());
        assert!(p.sections().is_empty());
    }

    #[test]
    fn invalid_directory_is_an_error() {
        let dir = tempdir().unwrap();

        let mut p = Profile::default();
        let err = p
            .load_directory(dir.path().join("no_such_dir"), "*.conf")
            .unwrap_err();

        assert!(matches!(err, LoadError::Directory { .. }));
    }

    #[test]
    fn per_file_errors_do_not_stop_the_sweep() {
        let dir = tempdir().unwrap();
        write(dir.path(), "part_b.conf", "[Tests]\nKey=good\n");
        fs::write(dir.path().join("part_a.conf"), [0x80u8, 0xff]).unwrap();

        let mut p = Profile::default();
        let outcome = p.load_directory(dir.path(), "part_*.conf").unwrap();

        assert_eq!(outcome.loaded, 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(p.raw_values("Tests", "Key").unwrap(), ["good"]);
    }

    #[test]
    fn subdirectories_matching_the_pattern_are_skipped() {
        let dir = tempdir().unwrap();
        write(dir.path(), "part_a.conf", "[Tests]\nKey=a\n");
        fs::create_dir(dir.path().join("part_dir.conf")).unwrap();

        let mut p = Profile::default();
        let outcome = p.load_directory(dir.path(), "part_*.conf").unwrap();

        assert_eq!(outcome.loaded, 1);
        assert!(outcome.errors.is_empty());
    }
}

mod combined {
    use super::*;

    #[test]
    fn plain_path_loads_as_a_single_file() {
        let dir = tempdir().unwrap();
        write(dir.path(), "legacy.conf", "[Tests]\nKey=a\n");

        let mut p = Profile::default();
        let outcome = p.load(dir.path().join("legacy.conf")).unwrap();

        assert_eq!(outcome.loaded, 1);
        assert!(outcome.errors.is_empty());
        assert_eq!(p.raw_values("Tests", "Key").unwrap(), ["a"]);
    }

    #[test]
    fn glob_in_the_final_segment_loads_the_directory() {
        let dir = tempdir().unwrap();
        write(dir.path(), "extended_part1.conf", "[Tests]\nKey=a\n");
        write(dir.path(), "extended_part2.conf", "[Tests]\nKey=b\n");

        let mut p = Profile::default();
        let outcome = p.load(dir.path().join("extended_part*.conf")).unwrap();

        assert_eq!(outcome.loaded, 2);
        assert_eq!(p.raw_values("Tests", "Key").unwrap(), ["a", "b"]);
    }

    #[test]
    fn glob_in_a_directory_component_fails_to_open() {
        let dir = tempdir().unwrap();
        write(dir.path(), "extended_part1.conf", "[Tests]\nKey=a\n");

        let mut p = Profile::default();
        let err = p
            .load(dir.path().join("fixtures*").join("extended_part*.conf"))
            .unwrap_err();

        assert!(matches!(err, LoadError::Directory { .. }));
    }

    #[test]
    fn absolute_glob_paths_work() {
        let dir = tempdir().unwrap();
        write(dir.path(), "extended_part1.conf", "[Tests]\nKey=a\n");

        let abs = dir.path().canonicalize().unwrap().join("extended_part?.conf");
        let mut p = Profile::default();
        let outcome = p.load(abs).unwrap();

        assert_eq!(outcome.loaded, 1);
    }

    #[test]
    fn missing_plain_file_propagates_the_read_error() {
        let dir = tempdir().unwrap();

        let mut p = Profile::default();
        let err = p.load(dir.path().join("absent.conf")).unwrap_err();

        assert!(matches!(err, LoadError::FileRead { .. }));
    }
}
