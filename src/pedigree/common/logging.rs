pub use colored::Colorize;

#[macro_export]
macro_rules! print_red {
    ($($arg:tt)*) => {{
        use $crate::pedigree::common::logging::Colorize as _;
        eprintln!("{}", format!($($arg)*).red());
    }};
}

#[macro_export]
macro_rules! print_green {
    ($($arg:tt)*) => {{
        use $crate::pedigree::common::logging::Colorize as _;
        println!("{}", format!($($arg)*).green());
    }};
}

#[macro_export]
macro_rules! print_yellow {
    ($($arg:tt)*) => {{
        use $crate::pedigree::common::logging::Colorize as _;
        println!("{}", format!($($arg)*).yellow());
    }};
}

#[macro_export]
macro_rules! print_blue {
    ($($arg:tt)*) => {{
        use $crate::pedigree::common::logging::Colorize as _;
        println!("{}", format!($($arg)*).blue().bold());
    }};
}
