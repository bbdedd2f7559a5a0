use tracing::debug;

use crate::context::SelectionContext;
use crate::error::Error;
use crate::error::Result;
use crate::invocation::Invocation;
use crate::invocation::InvocationClass;

/// Picks the first invocation whose class matches the effective session mode.
///
/// Order is priority: with the registry's probe order this means the fixed
/// fzf beats the `PATH` one, and rofi beats dmenu.
///
/// # Errors
///
/// - [`Error::NoSuitableExecutable`] if no invocation has the wanted class
pub fn select<'a>(
    invocations: &'a [Invocation],
    context: &SelectionContext,
) -> Result<&'a Invocation> {
    let desktop = context.effective_desktop();
    let wanted = InvocationClass::from_desktop(desktop);

    let chosen = invocations
        .iter()
        .find(|invocation| invocation.class() == wanted)
        .ok_or(Error::NoSuitableExecutable { desktop })?;

    debug!(%chosen, %wanted, "selected invocation");
    Ok(chosen)
}
