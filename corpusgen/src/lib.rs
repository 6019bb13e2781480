pub mod application;

pub mod presentation {
    pub mod cli;
    pub mod console;
    pub mod logging;
}
