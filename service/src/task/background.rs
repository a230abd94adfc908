//! Background environment for running [`Task`]s.

use std::{
    error::Error,
    future::{Future, IntoFuture},
    iter,
};

use futures::{
    future::{self, LocalBoxFuture},
    FutureExt as _, TryFutureExt as _,
};
use tokio::task;
use tracing as log;

#[cfg(doc)]
use crate::Task;

/// Boxed error of a failed [`Task`].
type BoxedError = Box<dyn Error + 'static>;

/// Background environment for running [`Task`]s.
///
/// Spawned [`Task`]s run only while the [`Background`] is awaited. It resolves
/// once every one of them has finished, failing with the first error.
#[derive(Debug, Default)]
pub struct Background {
    /// Local set of tasks.
    set: task::LocalSet,

    /// Names and handles of the spawned tasks.
    handles: Vec<(&'static str, task::JoinHandle<Result<(), BoxedError>>)>,
}

impl Background {
    /// Spawns a new named [`Task`] inside the [`Background`] environment.
    pub fn spawn<F, E>(&mut self, name: &'static str, future: F)
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Error + 'static,
    {
        log::debug!("spawning `{name}` background task");
        let handle = self
            .set
            .spawn_local(future.map_err(|e| BoxedError::from(Box::new(e))));
        self.handles.push((name, handle));
    }
}

impl IntoFuture for Background {
    type Output = Result<(), BoxedError>;
    type IntoFuture = LocalBoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        let Self { set, handles } = self;
        let tasks = handles.into_iter().map(|(name, h)| {
            h.map(move |r| -> Result<(), BoxedError> {
                let res = r.map_err(|e| BoxedError::from(Box::new(e)))?;
                match &res {
                    Ok(()) => log::debug!("`{name}` background task finished"),
                    Err(e) => {
                        log::error!("`{name}` background task failed: {e}");
                    }
                }
                res
            })
            .boxed_local()
        });
        future::try_join_all(iter::once(set.map(Ok).boxed_local()).chain(tasks))
            .map_ok(drop)
            .boxed_local()
    }
}

#[cfg(test)]
mod spec {
    use std::{cell::Cell, convert::Infallible, rc::Rc};

    use derive_more::{Display, Error};

    use super::Background;

    #[derive(Debug, Display, Error)]
    #[display("boom")]
    struct Boom;

    #[tokio::test]
    async fn runs_spawned_tasks_when_awaited() {
        let ran = Rc::new(Cell::new(false));
        let mut bg = Background::default();
        let flag = Rc::clone(&ran);
        bg.spawn("flag", async move {
            flag.set(true);
            Ok::<_, Infallible>(())
        });

        assert!(!ran.get());
        bg.await.unwrap();
        assert!(ran.get());
    }

    #[tokio::test]
    async fn fails_with_task_error() {
        let mut bg = Background::default();
        bg.spawn("boom", async { Err(Boom) });

        assert_eq!(bg.await.unwrap_err().to_string(), "boom");
    }
}
