use crate::rope::Rope;

impl Rope {
    /// Builds a tree of the same shape with `f` applied to every fragment.
    ///
    /// `f` sees one fragment at a time, never the text of its neighbours.
    pub fn fmap<F>(&self, mut f: F) -> Rope
    where
        F: FnMut(&str) -> String,
    {
        match self.try_fmap(|text| Ok::<_, std::convert::Infallible>(f(text))) {
            Ok(rope) => rope,
            Err(never) => match never {},
        }
    }

    /// Like [`Rope::fmap`], stopping at the first fragment `f` fails on.
    /// The input tree is never modified.
    pub fn try_fmap<F, E>(&self, mut f: F) -> Result<Rope, E>
    where
        F: FnMut(&str) -> Result<String, E>,
    {
        self.try_fmap_with(&mut f)
    }

    // Fragments are visited in text order: left subtree, node, right subtree.
    fn try_fmap_with<F, E>(&self, f: &mut F) -> Result<Rope, E>
    where
        F: FnMut(&str) -> Result<String, E>,
    {
        let left = self.left().map(|left| left.try_fmap_with(f)).transpose()?;
        let text = f(self.text())?;
        let right = self.right().map(|right| right.try_fmap_with(f)).transpose()?;

        Ok(Rope::with_children(text, left, right))
    }
}
