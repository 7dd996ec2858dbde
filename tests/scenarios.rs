use std::sync::{Arc, RwLock};
use std::thread;

use dir_tree_kit::{PathTree, TreeError};

#[test]
fn test_web_images_listing() -> anyhow::Result<()> {
    let mut tree = PathTree::new();
    let base = "Pictures/saved pictures/web images";
    for browser in ["Chrome", "Opera", "Firefox"] {
        tree.insert(&format!("{base}/{browser}"));
    }

    assert_eq!(
        tree.list(base)?,
        vec!["web images/", "  Chrome/", "  Firefox/", "  Opera/"]
    );
    Ok(())
}

#[test]
fn test_delete_middle_of_chain() -> anyhow::Result<()> {
    let mut tree = PathTree::new();
    tree.insert("A/B/C");
    tree.delete("A/B")?;

    assert!(tree.lookup("A").is_ok());
    assert!(matches!(tree.lookup("A/B"), Err(TreeError::NotFound { .. })));
    assert!(matches!(tree.lookup("A/B/C"), Err(TreeError::NotFound { .. })));
    Ok(())
}

#[test]
fn test_root_survives_everything() {
    let mut tree = PathTree::new();
    assert_eq!(tree.lookup(""), Ok(tree.root()));

    tree.insert("x/y");
    tree.delete("x").unwrap();
    assert_eq!(tree.delete(""), Err(TreeError::RootRemoval));
    assert_eq!(tree.lookup(""), Ok(tree.root()));
    assert_eq!(tree.render("").unwrap(), "Root/");
}

#[test]
fn test_original_walkthrough() -> anyhow::Result<()> {
    let mut tree = PathTree::new();
    for path in [
        "Pictures/saved pictures/web images/Chrome",
        "Pictures/saved pictures/web images/Opera",
        "Pictures/saved pictures/web images/Firefox",
        "Pictures/Screenshots",
        "Pictures/Camera Roll/2025",
        "Pictures/Camera Roll/2024",
        "Pictures/Camera Roll/2023",
        "Pictures/Camera Roll/2025/Vacation",
    ] {
        tree.insert(path);
    }

    tree.delete("Pictures/saved pictures/web images/Opera")?;
    tree.delete("Pictures/saved pictures/web images")?;

    assert_eq!(
        tree.render("")?,
        [
            "Root/",
            "  Pictures/",
            "    Camera Roll/",
            "      2023/",
            "      2024/",
            "      2025/",
            "        Vacation/",
            "    Screenshots/",
            "    saved pictures/",
        ]
        .join("\n")
    );
    Ok(())
}

#[test]
fn test_shared_behind_rwlock() {
    let tree = Arc::new(RwLock::new(PathTree::new()));
    tree.write().unwrap().insert("shared/dir");

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || tree.read().unwrap().list("shared").unwrap())
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), vec!["shared/", "  dir/"]);
    }
}
