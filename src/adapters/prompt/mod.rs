pub mod line_prompter;
