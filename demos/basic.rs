use urlcanon::Url;

fn main() {
    // Parse a URL into its eight components
    let url = Url::parse("https://user@example.com:8080/path;v=2?query=value#hash")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // https://user@example.com:8080/path;v=2?query=value#hash
    println!("Scheme: {}", url.scheme()); // https
    println!("Userinfo: {}", url.userinfo()); // user
    println!("Host: {}", url.host()); // example.com
    println!("Port: {}", url.port()); // 8080
    println!("Path: {}", url.path()); // /path
    println!("Params: {}", url.params()); // v=2
    println!("Query: {}", url.query()); // query=value
    println!("Fragment: {}", url.fragment()); // hash
    println!("Fullpath: {}", url.fullpath()); // /path;v=2?query=value#hash

    // Resolve a relative reference
    let mut link = Url::parse("../img/logo.png").expect("Failed to parse reference");
    link.relative_to(&url).abspath();
    println!("Resolved: {link}"); // https://user@example.com:8080/img/logo.png
}
