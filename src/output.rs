use crate::domain::{Outcome, OutputSink};

#[derive(Default, Debug)]
pub struct StdOutOutput {}

impl OutputSink for StdOutOutput {
    fn report(&mut self, outcome: &Outcome) {
        println!("{}", outcome);
    }
}
