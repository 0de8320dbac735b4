//! Integration tests for snippet persistence
//!
//! Each test works in its own directory under the system temp dir and cleans
//! up after itself.

use dailysnip::store::{SavedSnippet, SnippetStore};
use dailysnip::types::Snippet;
use std::fs;
use std::path::PathBuf;

fn test_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir()
        .join(format!("dailysnip-store-tests-{}", std::process::id()))
        .join(name);
    let _ = fs::remove_dir_all(&root);
    root
}

fn sample_snippet(what: &str) -> Snippet {
    Snippet {
        what: what.to_string(),
        why: "because".to_string(),
        highlight: "it worked".to_string(),
        lowlight: "it was slow".to_string(),
        tomorrow: "more of it".to_string(),
    }
}

mod store_tests {
    use super::*;

    #[test]
    fn save_then_load_roundtrips_the_record() {
        let root = test_root("roundtrip");
        let store = SnippetStore::new(root.clone());

        let saved = store
            .save(&sample_snippet("fixed the login bug"))
            .expect("save should succeed");
        assert!(saved.file_path.is_some());

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].snippet, sample_snippet("fixed the login bug"));
        assert_eq!(loaded[0].id, saved.id);

        fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn load_on_a_missing_directory_is_empty() {
        let store = SnippetStore::new(test_root("missing"));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn records_come_back_newest_first() {
        let root = test_root("ordering");
        fs::create_dir_all(&root).expect("create test dir");

        for (name, created_at) in [("older", 1_700_000_000_u64), ("newer", 1_700_100_000)] {
            let record = SavedSnippet {
                id: String::new(),
                snippet: sample_snippet(name),
                created_at,
                file_path: None,
            };
            fs::write(
                root.join(format!("{name}.json")),
                serde_json::to_string(&record).unwrap(),
            )
            .expect("write record");
        }

        let store = SnippetStore::new(root.clone());
        let loaded = store.load_all();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].snippet.what, "newer");
        assert_eq!(loaded[1].snippet.what, "older");

        fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn unrelated_and_malformed_files_are_skipped() {
        let root = test_root("tolerance");
        let store = SnippetStore::new(root.clone());
        store.save(&sample_snippet("real record")).expect("save");

        fs::write(root.join("notes.txt"), "not a record").expect("write");
        fs::write(root.join("broken.json"), "{ nope").expect("write");

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].snippet.what, "real record");

        fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn delete_removes_the_backing_file() {
        let root = test_root("delete");
        let store = SnippetStore::new(root.clone());

        let saved = store.save(&sample_snippet("to be removed")).expect("save");
        assert_eq!(store.load_all().len(), 1);

        store.delete(&saved.id).expect("delete");
        assert!(store.load_all().is_empty());

        // Deleting an already-missing record is fine.
        store.delete(&saved.id).expect("repeat delete");

        fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn stores_with_different_roots_are_isolated() {
        let root_a = test_root("isolation-a");
        let root_b = test_root("isolation-b");
        let store_a = SnippetStore::new(root_a.clone());
        let store_b = SnippetStore::new(root_b.clone());

        store_a.save(&sample_snippet("from a")).expect("save a");
        store_b.save(&sample_snippet("from b")).expect("save b");

        assert_eq!(store_a.load_all().len(), 1);
        assert_eq!(store_b.load_all().len(), 1);
        assert_eq!(store_a.load_all()[0].snippet.what, "from a");
        assert_eq!(store_b.load_all()[0].snippet.what, "from b");

        fs::remove_dir_all(&root_a).expect("cleanup a");
        fs::remove_dir_all(&root_b).expect("cleanup b");
    }

    #[test]
    fn blank_what_field_still_gets_a_filename() {
        let root = test_root("blank-what");
        let store = SnippetStore::new(root.clone());

        let saved = store
            .save(&Snippet::default())
            .expect("save of empty snippet succeeds");
        let path = saved.file_path.expect("file path");
        assert!(path.contains("snippet-"));

        fs::remove_dir_all(&root).expect("cleanup");
    }
}
