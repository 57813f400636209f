use std::env;
use std::str::FromStr;

/// Returns the named environment variable parsed as `T`, or `default`
/// if it isn't set. Panics if it is set but doesn't parse.
pub fn get_variable_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|e| panic!("parse {} ({:?}): {:?}", name, value, e)),
        Err(_) => default,
    }
}
