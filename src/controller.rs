use crate::enums::HttpMethod;
use crate::request::RequestContext;
use crate::response::Response;
use crate::signal::StatusSignal;

/// Collaborators handed to a handler for the duration of one dispatch call:
/// the request being served and the response builder it may write to.
#[derive(Debug)]
pub struct Exchange<'a, 's> {
    pub request: &'a RequestContext,
    pub response: &'a mut Response<'s>,
}

/// `Ok` completes the dispatch with an optional value; `Err` is a
/// controller-raised status that flows through the same terminal path as a
/// dispatcher-generated one.
pub type HandlerReply = Result<Option<String>, StatusSignal>;

/// One per-verb operation of a controller. Parameters arrive positionally,
/// in placeholder declaration order.
pub trait Handler {
    fn invoke(&self, exchange: &mut Exchange<'_, '_>, params: &[String]) -> HandlerReply;
}

/// Adapter for plain functions and closures.
pub struct FnHandler<F>(pub F);

impl<F> Handler for FnHandler<F>
where
    F: Fn(&mut Exchange<'_, '_>, &[String]) -> HandlerReply,
{
    fn invoke(&self, exchange: &mut Exchange<'_, '_>, params: &[String]) -> HandlerReply {
        (self.0)(exchange, params)
    }
}

/// Outcome of resolving a verb against a controller's capability set.
pub enum Resolution<'a> {
    Handler(&'a dyn Handler),
    Unsupported,
}

/// A controller exposes at most one handler per HTTP verb. Resolution is
/// explicit; there is no name-based operation lookup.
pub trait Controller {
    fn resolve(&self, verb: HttpMethod) -> Resolution<'_>;
}
