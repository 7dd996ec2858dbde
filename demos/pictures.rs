use dir_tree_kit::{PathTree, TracingObserver};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let mut tree = PathTree::new().with_observer(TracingObserver);

    tree.insert("Pictures");
    tree.insert("Pictures/saved pictures");
    tree.insert("Pictures/saved pictures/web images");
    tree.insert("Pictures/saved pictures/web images/Chrome");
    tree.insert("Pictures/saved pictures/web images/Opera");
    tree.insert("Pictures/saved pictures/web images/Firefox");
    tree.insert("Pictures/Screenshots");
    tree.insert("Pictures/Camera Roll");
    tree.insert("Pictures/Camera Roll/2025");
    tree.insert("Pictures/Camera Roll/2024");
    tree.insert("Pictures/Camera Roll/2023");

    println!("\nInitial directory structure:");
    println!("{}", tree.render("")?);

    println!("\nAdding a new directory:");
    tree.insert("Pictures/Camera Roll/2025/Vacation");
    println!("{}", tree.render("")?);

    println!("\nDeleting a directory:");
    tree.delete("Pictures/saved pictures/web images/Opera")?;
    println!("{}", tree.render("")?);

    println!("\nDeleting a directory and all its subdirectories:");
    tree.delete("Pictures/saved pictures/web images")?;
    println!("{}", tree.render("")?);

    if let Err(e) = tree.delete("Pictures/Videos") {
        println!("\n{e}");
    }

    Ok(())
}
