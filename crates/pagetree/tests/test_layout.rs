//! Integration tests for the org-chart layout pass.

#[cfg(test)]
mod tests {
    use pagetree::{Expanse, Layout, PageTree, Point, Result, VERTICAL_GAP};

    #[test]
    fn worked_example() -> Result<()> {
        // Root 100 wide in a 300 container, two children 60 and 80 wide
        // with the default 20 gap.
        let mut t = PageTree::new();
        let root = t.add_root("home", Expanse::new(100.0, 40.0));
        let a = t.add_child(root, "about", Expanse::new(60.0, 30.0))?;
        let b = t.add_child(root, "news", Expanse::new(80.0, 30.0))?;

        Layout::new().solve(&mut t, root, 300.0)?;

        // Root is centered: 300/2 - 100/2.
        assert_eq!(t.get(root)?.pos(), Some(Point::new(100.0, 0.0)));
        // Child block is 60 + 20 + 80 = 160, so it starts at
        // 100 + 50 - 80 = 70, one row below the root.
        assert_eq!(t.get(a)?.pos(), Some(Point::new(70.0, 60.0)));
        assert_eq!(t.get(b)?.pos(), Some(Point::new(150.0, 60.0)));
        Ok(())
    }

    #[test]
    fn single_child_is_centered_exactly() -> Result<()> {
        let mut t = PageTree::new();
        let root = t.add_root("home", Expanse::new(100.0, 40.0));
        let child = t.add_child(root, "about", Expanse::new(50.0, 30.0))?;

        Layout::new().solve(&mut t, root, 300.0)?;

        let rp = t.get(root)?.pos().unwrap();
        let cp = t.get(child)?.pos().unwrap();
        // No gap term for a single child; midpoints coincide.
        assert_eq!(cp.x + 25.0, rp.x + 50.0);
        assert_eq!(cp, Point::new(125.0, 60.0));
        Ok(())
    }

    #[test]
    fn vertical_stacking_over_three_levels() -> Result<()> {
        let mut t = PageTree::new();
        let root = t.add_root("home", Expanse::new(100.0, 40.0));
        let child = t.add_child(root, "about", Expanse::new(60.0, 25.0))?;
        let grandchild = t.add_child(child, "team", Expanse::new(30.0, 15.0))?;

        Layout::new().solve(&mut t, root, 500.0)?;

        let cp = t.get(child)?.pos().unwrap();
        let gp = t.get(grandchild)?.pos().unwrap();
        assert_eq!(cp.y, 40.0 + VERTICAL_GAP);
        assert_eq!(gp.y, cp.y + 25.0 + VERTICAL_GAP);
        // The grandchild centers under the child, not the root.
        assert_eq!(gp.x + 15.0, cp.x + 30.0);
        Ok(())
    }

    #[test]
    fn root_wider_than_container() -> Result<()> {
        let mut t = PageTree::new();
        let root = t.add_root("home", Expanse::new(100.0, 40.0));
        Layout::new().solve(&mut t, root, 50.0)?;
        // 50/2 - 100/2: the root overflows symmetrically.
        assert_eq!(t.get(root)?.pos(), Some(Point::new(-25.0, 0.0)));
        Ok(())
    }

    #[test]
    fn repeated_pass_is_bit_identical() -> Result<()> {
        let mut t = PageTree::new();
        let root = t.add_root("home", Expanse::new(137.0, 41.0));
        let a = t.add_child(root, "a", Expanse::new(61.3, 29.0))?;
        let _ = t.add_child(root, "b", Expanse::new(17.7, 33.0))?;
        let _ = t.add_child(root, "c", Expanse::new(94.1, 28.0))?;
        let _ = t.add_child(a, "a1", Expanse::new(55.5, 20.0))?;
        let _ = t.add_child(a, "a2", Expanse::new(42.9, 20.0))?;

        let lay = Layout::new();
        lay.solve(&mut t, root, 777.3)?;
        let first: Vec<Option<Point>> = t.preorder(root).map(|id| t.get(id).ok()?.pos()).collect();
        lay.solve(&mut t, root, 777.3)?;
        let second: Vec<Option<Point>> = t.preorder(root).map(|id| t.get(id).ok()?.pos()).collect();
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn custom_gaps() -> Result<()> {
        let mut t = PageTree::new();
        let root = t.add_root("home", Expanse::new(100.0, 40.0));
        let a = t.add_child(root, "a", Expanse::new(60.0, 30.0))?;
        let b = t.add_child(root, "b", Expanse::new(80.0, 30.0))?;

        Layout::with_gaps(10.0, 5.0).solve(&mut t, root, 300.0)?;

        // Block is 60 + 10 + 80 = 150, starting at 100 + 50 - 75 = 75.
        assert_eq!(t.get(a)?.pos(), Some(Point::new(75.0, 45.0)));
        assert_eq!(t.get(b)?.pos(), Some(Point::new(145.0, 45.0)));
        Ok(())
    }

    #[test]
    fn forest_roots_are_independent() -> Result<()> {
        let mut t = PageTree::new();
        let first = t.add_root("home", Expanse::new(100.0, 40.0));
        let second = t.add_root("archive", Expanse::new(60.0, 40.0));
        let _ = t.add_child(second, "y2024", Expanse::new(60.0, 30.0))?;

        Layout::new().solve_forest(&mut t, 400.0)?;

        // Each root centers in the same container on its own.
        assert_eq!(t.get(first)?.pos(), Some(Point::new(150.0, 0.0)));
        assert_eq!(t.get(second)?.pos(), Some(Point::new(170.0, 0.0)));
        Ok(())
    }
}
