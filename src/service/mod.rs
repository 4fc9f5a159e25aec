pub mod access;
pub mod extension;
pub mod matcher;
pub mod member_event;
pub mod random;
pub mod reaction_role;
pub mod report;

#[cfg(test)]
mod test;
