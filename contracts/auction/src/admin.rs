use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;

/// Ensure `caller` is authenticated and is the platform administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
    if admin != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
