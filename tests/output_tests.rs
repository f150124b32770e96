// tests/output_tests.rs

use igqloo::output::{to_query, to_query_with, PrintOptions, QueryPrinter};
use igqloo::{parse_fields, QueryTree};

#[test]
fn test_empty_tree_is_just_the_keyword() {
    assert_eq!(to_query(&QueryTree::new()), "query");
}

#[test]
fn test_display_matches_to_query() {
    let tree = parse_fields(["user.name,email"]).unwrap();

    assert_eq!(tree.to_string(), to_query(&tree));
    assert_eq!(to_query(&tree), "query{user{name,email}}");
}

#[test]
fn test_alias_comes_before_name_and_filters() {
    let mut tree = QueryTree::new();
    let root = tree.root();
    let posts = tree.resolve_path(root, "posts");
    tree.set_alias(posts, "p");
    tree.set_filter(posts, "first", "5");

    assert_eq!(to_query(&tree), r#"query{p:posts(first:"5")}"#);
}

#[test]
fn test_filters_without_separator_by_default() {
    let tree = parse_fields(["posts(first:5)(after:abc)"]).unwrap();

    assert_eq!(to_query(&tree), r#"query{posts(first:"5"after:"abc")}"#);
}

#[test]
fn test_comma_separated_filters() {
    let tree = parse_fields(["posts(first:5)(after:abc).title"]).unwrap();

    assert_eq!(
        to_query_with(&tree, &PrintOptions::comma_separated()),
        r#"query{posts(first:"5",after:"abc"){title}}"#
    );
}

#[test]
fn test_single_filter_ignores_separator() {
    let tree = parse_fields(["posts(first:5)"]).unwrap();
    let options = PrintOptions {
        argument_separator: ", ".to_string(),
    };

    assert_eq!(to_query_with(&tree, &options), r#"query{posts(first:"5")}"#);
}

#[test]
fn test_filter_values_are_not_escaped() {
    let tree = parse_fields([r#"search(q:say \"hi\")"#]).unwrap();

    assert_eq!(to_query(&tree), r#"query{search(q:"say \"hi\"")}"#);
}

#[test]
fn test_print_subtree_omits_query_keyword() {
    let tree = parse_fields(["user(posts as p)(first:3).title"]).unwrap();
    let posts = tree.lookup(tree.root(), "user.posts").unwrap();
    let printer = QueryPrinter::new(PrintOptions::default());

    assert_eq!(printer.print_node(&tree, posts), r#"p:posts(first:"3"){title}"#);
    assert_eq!(
        printer.print(&tree),
        r#"query{user{p:posts(first:"3"){title}}}"#
    );
}

#[test]
fn test_deep_nesting_with_multiple_branches() {
    let tree = parse_fields([
        "repo(name:igqloo).issues(first:10).title,author.login",
        "repo.stars",
    ])
    .unwrap();

    assert_eq!(
        to_query(&tree),
        r#"query{repo(name:"igqloo"){issues(first:"10"){title,author{login}},stars}}"#
    );
}
