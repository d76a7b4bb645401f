use std::collections::BTreeMap;

use cookie::Cookie;

use crate::{CookieOptions, Result};

/// Read access to cookies, all the server side ever needs.
pub trait CookieSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// Cookies are ambient page state, so writes go through `&self`.
pub trait CookieStore: CookieSource {
    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<()>;
}

impl<T: CookieSource + ?Sized> CookieSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

impl<T: CookieStore + ?Sized> CookieStore for &T {
    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<()> {
        (**self).set(name, value, options)
    }
}

impl CookieSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

/// A raw `Cookie` request header, or the contents of `document.cookie`.
///
/// Values are percent-decoded, matching what [`CookieOptions::build`] writes
/// once encoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CookieHeader<'a>(&'a str);

impl<'a> CookieHeader<'a> {
    pub const fn new(header: &'a str) -> Self {
        Self(header)
    }

    /// Cookies in header order, unparseable pairs skipped.
    pub fn cookies(self) -> impl Iterator<Item = Cookie<'a>> {
        Cookie::split_parse_encoded(self.0).filter_map(|cookie| {
            cookie
                .inspect_err(|err| log::trace!("skipping cookie: {}", err))
                .ok()
        })
    }

    /// The first cookie called `name`, surrounding quotes stripped.
    pub fn find(self, name: &str) -> Option<String> {
        self.cookies()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value_trimmed().to_string())
    }
}

impl CookieSource for CookieHeader<'_> {
    fn get(&self, name: &str) -> Option<String> {
        self.find(name)
    }
}
