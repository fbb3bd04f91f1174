use colored::Colorize;

pub fn success(msg: &str) {
    println!("{}", msg.green());
}

pub fn notice(msg: &str) {
    println!("{}", msg.yellow());
}

pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

pub fn failure(msg: &str) {
    println!("{}", msg.red());
}
