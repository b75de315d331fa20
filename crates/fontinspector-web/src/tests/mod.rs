mod harness;
mod project;
mod recovery;
