pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
