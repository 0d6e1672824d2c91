mod learn;
mod quiz;

pub use learn::LearnView;
pub use quiz::QuizView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
