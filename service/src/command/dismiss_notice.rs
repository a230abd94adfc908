//! [`Command`] for dismissing the shown [`Notice`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::store::Notice;
use crate::{store::Action, Service};

use super::Command;

/// [`Command`] for dismissing the shown [`Notice`].
#[derive(Clone, Copy, Debug)]
pub struct DismissNotice;

impl<B, G> Command<DismissNotice> for Service<B, G> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: DismissNotice) -> Result<Self::Ok, Self::Err> {
        self.store().dispatch(Action::Dismissed).await;
        Ok(())
    }
}
