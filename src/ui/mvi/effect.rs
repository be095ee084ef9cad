//! Effects returned by reducers.

use std::future::Future;

/// Follow-up of a reduction.
#[derive(Debug, PartialEq)]
pub enum Effect<I, W> {
    /// Nothing further to do.
    None,
    /// Feed another intent back into the reducer within the same send.
    Send(I),
    /// Run asynchronous work; its resulting intent is sent back to the store.
    Run(W),
}

/// Executes the asynchronous work a reducer describes.
pub trait Environment<W, I>: Send + Sync + 'static {
    fn run(&self, work: W) -> impl Future<Output = I> + Send;
}
