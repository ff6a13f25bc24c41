#[cfg(test)]
mod common;
#[cfg(test)]
mod test_highlight;
#[cfg(test)]
mod test_scope;
