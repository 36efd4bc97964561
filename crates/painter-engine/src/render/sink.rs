/// Consumer of finished frames.
///
/// `present` runs on the render thread, once per publish-worthy operation.
/// The surface is borrowed only for the duration of the call and is not
/// mutated while borrowed; a sink that needs the frame afterwards must copy
/// it. A slow sink stalls the render loop.
pub trait DisplaySink<S>: Send {
    fn present(&mut self, surface: &S);
}

impl<S, F> DisplaySink<S> for F
where
    F: FnMut(&S) + Send,
{
    #[inline]
    fn present(&mut self, surface: &S) {
        self(surface)
    }
}
