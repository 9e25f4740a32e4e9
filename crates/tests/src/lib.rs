pub mod fixtures;

#[cfg(test)]
mod admin_tests;
#[cfg(test)]
mod content_tests;
#[cfg(test)]
mod preview_tests;
#[cfg(test)]
mod publish_tests;
#[cfg(test)]
mod status_tests;
