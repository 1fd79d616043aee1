use crate::character_sets::{PATH, QUERY, USERINFO};
use crate::compat::{String, ToString, Vec};
use crate::error::{ParseError, PunycodeError, Result};
use crate::host;
use crate::param_list::ParamList;
use crate::path::{directory_of, normalize_path};
use crate::scheme::default_port;
use crate::unicode::percent_encode::{escape_component, unescape_component};

/// A URL split into its eight components.
///
/// Every transformation mutates the value in place and returns `&mut Self`,
/// so canonicalization steps chain:
///
/// ```
/// use urlcanon::Url;
///
/// let mut url = Url::parse("http://Example.com:80/a/./b/../c?b=2&a=1#top").unwrap();
/// url.abspath().sort_query().defrag().remove_default_port();
/// assert_eq!(url.to_string(), "http://example.com/a/c?a=1&b=2");
/// ```
///
/// Port 0 means "no port".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    pub(crate) scheme: String,
    pub(crate) userinfo: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) path: String,
    pub(crate) params: String,
    pub(crate) query: String,
    pub(crate) fragment: String,
}

impl Url {
    /// Parse a URL string.
    ///
    /// Parsing is lenient: anything that is not a scheme or an authority
    /// ends up in the path.
    ///
    /// # Errors
    ///
    /// Returns an error only if the port is not a number, is negative, or is
    /// larger than 65535.
    pub fn parse(input: &str) -> Result<Self> {
        crate::parser::parse_url(input)
    }

    /// Get the scheme, lowercase (e.g., "http"), or empty
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the raw `user[:password]` text
    pub fn userinfo(&self) -> &str {
        &self.userinfo
    }

    /// Get the lowercase host, without port
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port, 0 if none was given
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the `;`-separated params of the last path segment
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Get the query, without the leading `?`
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the fragment, without the leading `#`
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn set_scheme(&mut self, scheme: &str) -> &mut Self {
        self.scheme = scheme.to_string();
        self
    }

    pub fn set_userinfo(&mut self, userinfo: &str) -> &mut Self {
        self.userinfo = userinfo.to_string();
        self
    }

    pub fn set_host(&mut self, host: &str) -> &mut Self {
        self.host = host.to_string();
        self
    }

    /// Set the port; 0 removes it
    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.port = port;
        self
    }

    pub fn set_path(&mut self, path: &str) -> &mut Self {
        self.path = path.to_string();
        self
    }

    pub fn set_params(&mut self, params: &str) -> &mut Self {
        self.params = params.to_string();
        self
    }

    pub fn set_query(&mut self, query: &str) -> &mut Self {
        self.query = query.to_string();
        self
    }

    pub fn set_fragment(&mut self, fragment: &str) -> &mut Self {
        self.fragment = fragment.to_string();
        self
    }

    /// Check if the URL has any authority component
    fn has_authority(&self) -> bool {
        !self.host.is_empty() || !self.userinfo.is_empty() || self.port != 0
    }

    /// Path (always starting with `/`) followed by params, query and
    /// fragment, as sent in an HTTP request line.
    pub fn fullpath(&self) -> String {
        let mut result = String::with_capacity(
            self.path.len() + self.params.len() + self.query.len() + self.fragment.len() + 4,
        );
        if !self.path.starts_with('/') {
            result.push('/');
        }
        result.push_str(&self.path);
        self.write_suffix(&mut result);
        result
    }

    fn write_suffix(&self, out: &mut String) {
        if !self.params.is_empty() {
            out.push(';');
            out.push_str(&self.params);
        }
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            out.push('#');
            out.push_str(&self.fragment);
        }
    }

    /// Collapse dot-segments and empty segments in the path.
    ///
    /// The path always comes out absolute; an empty path becomes `/`.
    /// Opaque URLs (a scheme with a rootless path, like `mailto:a@b` or
    /// `javascript:...`) are left alone.
    pub fn abspath(&mut self) -> &mut Self {
        if !self.is_opaque() {
            self.path = normalize_path(&self.path);
        }
        self
    }

    /// A scheme with no authority and a rootless path
    fn is_opaque(&self) -> bool {
        !self.scheme.is_empty()
            && !self.has_authority()
            && !self.path.is_empty()
            && !self.path.starts_with('/')
    }

    /// Resolve this URL as a reference relative to `base`.
    ///
    /// Components missing here are filled in from `base`; a relative path
    /// is appended to the directory of `base`'s path. Dot-segments are left
    /// alone, call [`Url::abspath`] afterwards to collapse them.
    ///
    /// A reference with a scheme of its own that differs from `base`'s is
    /// already absolute and is not touched.
    pub fn relative_to(&mut self, base: &Url) -> &mut Self {
        if !self.scheme.is_empty() && self.scheme != base.scheme {
            return self;
        }
        if self.scheme.is_empty() {
            self.scheme.clone_from(&base.scheme);
        }

        // Absolute or scheme-relative
        if !self.host.is_empty() {
            return self;
        }

        self.host.clone_from(&base.host);
        self.port = base.port;
        self.userinfo.clone_from(&base.userinfo);

        if self.path.starts_with('/') {
            return self;
        }

        if self.path.is_empty() {
            if self.params.is_empty() {
                self.path.clone_from(&base.path);
                self.params.clone_from(&base.params);
                if self.query.is_empty() {
                    self.query.clone_from(&base.query);
                }
            } else {
                self.path = directory_of(&base.path).to_string();
            }

            if self.fragment.is_empty() {
                self.fragment.clone_from(&base.fragment);
            }
        } else if base.path.contains('/') {
            self.path.insert_str(0, directory_of(&base.path));
        } else if !self.host.is_empty() {
            self.path.insert(0, '/');
        }

        self
    }

    /// Parse `base` and resolve this URL against it.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` has a malformed port.
    pub fn relative_to_str(&mut self, base: &str) -> Result<&mut Self> {
        let base = Self::parse(base)?;
        Ok(self.relative_to(&base))
    }

    /// Normalize percent-encoding in the path, params, query and userinfo.
    ///
    /// Bytes outside each component's safe set are escaped with uppercase
    /// hex, and escaped bytes inside it are decoded. With `strict`, escaped
    /// reserved characters stay escaped.
    pub fn escape(&mut self, strict: bool) -> &mut Self {
        self.path = escape_component(&self.path, &PATH, strict);
        self.query = escape_component(&self.query, &QUERY, strict);
        self.params = escape_component(&self.params, &QUERY, strict);
        self.userinfo = escape_component(&self.userinfo, &USERINFO, strict);
        self
    }

    /// Decode every valid `%XX` entity in the path, params, query and userinfo.
    pub fn unescape(&mut self) -> &mut Self {
        self.path = unescape_component(&self.path);
        self.query = unescape_component(&self.query);
        self.params = unescape_component(&self.params);
        self.userinfo = unescape_component(&self.userinfo);
        self
    }

    /// Remove query and params entries whose name is in `blacklist`,
    /// ignoring ASCII case.
    pub fn deparam(&mut self, blacklist: &[&str]) -> &mut Self {
        let blacklist: Vec<String> = blacklist
            .iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        self.deparam_by(|name, _| blacklist.iter().any(|banned| banned == name))
    }

    /// Remove query and params entries for which `remove(name, value)`
    /// returns true. The name is passed lowercased, the value verbatim.
    pub fn deparam_by<F>(&mut self, mut remove: F) -> &mut Self
    where
        F: FnMut(&str, &str) -> bool,
    {
        let mut params = ParamList::parse(&self.params, ';');
        params.remove_where(&mut remove);
        self.params = params.serialize();

        let mut query = ParamList::parse(&self.query, '&');
        query.remove_where(&mut remove);
        self.query = query.serialize();

        self
    }

    /// Sort query and params entries bytewise.
    ///
    /// Run after [`Url::escape`] so equivalent entries sort the same way.
    pub fn sort_query(&mut self) -> &mut Self {
        let mut params = ParamList::parse(&self.params, ';');
        params.sort();
        self.params = params.serialize();

        let mut query = ParamList::parse(&self.query, '&');
        query.sort();
        self.query = query.serialize();

        self
    }

    /// Drop the port if it is the scheme's default.
    pub fn remove_default_port(&mut self) -> &mut Self {
        if self.port != 0 && default_port(&self.scheme) == Some(self.port) {
            self.port = 0;
        }
        self
    }

    pub fn deuserinfo(&mut self) -> &mut Self {
        self.userinfo.clear();
        self
    }

    pub fn defrag(&mut self) -> &mut Self {
        self.fragment.clear();
        self
    }

    /// Punycode every non-ASCII host label (`xn--` form).
    ///
    /// A single trailing root dot is dropped. Bracketed IP literals and
    /// empty hosts are left alone.
    ///
    /// # Errors
    ///
    /// Fails on empty labels, labels longer than 63 bytes once encoded, and
    /// encoder overflow. The host is unchanged on failure.
    pub fn punycode(&mut self) -> core::result::Result<&mut Self, PunycodeError> {
        if !self.host.is_empty() && !host::is_ip_literal(&self.host) {
            self.host = host::to_ascii(&self.host)?;
        }
        Ok(self)
    }

    /// Decode every `xn--` host label back to Unicode.
    ///
    /// # Errors
    ///
    /// Fails on empty labels and undecodable labels. The host is unchanged
    /// on failure.
    pub fn unpunycode(&mut self) -> core::result::Result<&mut Self, PunycodeError> {
        if !self.host.is_empty() && !host::is_ip_literal(&self.host) {
            self.host = host::to_unicode(&self.host)?;
        }
        Ok(self)
    }

    /// Reverse the order of the host's labels (`a.example.com` becomes
    /// `com.example.a`). Applying it twice restores the host.
    pub fn host_reversed(&mut self) -> &mut Self {
        if !host::is_ip_literal(&self.host) {
            self.host = host::reverse_labels(&self.host);
        }
        self
    }

    /// Run the canonicalization pipeline in place.
    fn canonicalize(&mut self) -> core::result::Result<&mut Self, PunycodeError> {
        self.sort_query()
            .defrag()
            .deuserinfo()
            .abspath()
            .escape(false)
            .punycode()
            .map(Self::remove_default_port)
    }

    /// Check whether two URLs point at the same place once both are
    /// canonicalized. Neither URL is modified.
    ///
    /// # Errors
    ///
    /// Returns the first punycoding failure of either URL.
    pub fn try_equiv(&self, other: &Url) -> core::result::Result<bool, PunycodeError> {
        let mut this = self.clone();
        let mut that = other.clone();
        this.canonicalize()?;
        that.canonicalize()?;
        Ok(this == that)
    }

    /// Like [`Url::try_equiv`], treating a canonicalization failure as "not
    /// equivalent".
    pub fn equiv(&self, other: &Url) -> bool {
        self.try_equiv(other).unwrap_or_else(|err| {
            log::debug!("cannot compare {self} and {other}: {err}");
            false
        })
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let authority = self.has_authority();
        let mut wrote_slashes = false;

        if !self.scheme.is_empty() {
            f.write_str(&self.scheme)?;
            f.write_str(":")?;
            if authority || self.path.starts_with('/') {
                f.write_str("//")?;
                wrote_slashes = true;
            }
        } else if authority || self.path.starts_with("//") {
            f.write_str("//")?;
            wrote_slashes = true;
        }

        if !self.userinfo.is_empty() {
            write!(f, "{}@", self.userinfo)?;
        }
        f.write_str(&self.host)?;
        if self.port != 0 {
            write!(f, ":{}", self.port)?;
        }

        if wrote_slashes && !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        let mut suffix = String::new();
        self.write_suffix(&mut suffix);
        f.write_str(&suffix)
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
