/// Paint layer. Lower layers are drawn first (further back); items on the
/// same layer keep insertion order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Layer(pub i32);

impl Layer {
    pub const BACKGROUND: Layer = Layer(-100);
    pub const WORLD: Layer = Layer(0);
    pub const OVERLAY: Layer = Layer(100);

    /// A layer `n` steps above this one.
    #[inline]
    pub const fn above(self, n: i32) -> Layer {
        Layer(self.0 + n)
    }
}
