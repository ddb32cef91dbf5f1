// Header names are matched case-insensitively but emitted in the conventional
// capitalization. Words may be separated by hyphens or spaces on the way in;
// they always leave separated by hyphens.
pub fn normalize_name(name: &str) -> String {
  let mut normalized = String::with_capacity(name.len());
  let mut word_start = true;
  for c in name.chars() {
    if c == '-' || c == ' ' {
      normalized.push('-');
      word_start = true;
    } else if word_start {
      normalized.extend(c.to_uppercase());
      word_start = false;
    } else {
      normalized.push(c);
    }
  }
  return normalized;
}

// ordered list of header lines, one value per (case-insensitive) name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderLines {
  inner: Vec<(String, String)>,
}

impl HeaderLines {
  pub fn new() -> HeaderLines {
    HeaderLines { inner: Vec::new() }
  }

  // replaces an earlier header of the same name in place, keeping its position
  pub fn set(&mut self, name: String, value: String) {
    match self
      .inner
      .iter_mut()
      .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
      Some(line) => *line = (name, value),
      None => self.inner.push((name, value)),
    }
  }

  // always adds a new line. Used for headers that may repeat, like Set-Cookie
  pub fn append(&mut self, name: String, value: String) {
    self.inner.push((name, value));
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .inner
      .iter()
      .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }

  pub fn get_all<'h>(&'h self, name: &'h str) -> impl Iterator<Item = &'h str> + 'h {
    self
      .inner
      .iter()
      .filter(move |(existing, _)| existing.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.get(name).is_some()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.inner.iter().map(|(name, value)| (name.as_str(), value.as_str()))
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }
}
