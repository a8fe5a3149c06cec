use spamtree::prelude::*;
use std::collections::BTreeMap;


fn toy_tree() -> DecisionTree {
    let mut tree = DecisionTree::new();
    tree.insert(FeatureVector::new("buy now"), "Spam");
    tree.insert(FeatureVector::new("hello friend"), "Ham");
    tree
}


#[test]
fn all_correct_predictions() {
    let tree = toy_tree();
    let data = vec![
        FeatureVector::new("buy"),
        FeatureVector::new("buy buy now"),
        FeatureVector::new("hello"),
    ];
    let labels = ["Spam", "Spam", "Ham"];

    let acc = tree.accuracy(&data, &labels).unwrap();
    assert_eq!(Some(1.0), acc.get("Spam"));
    assert_eq!(Some(1.0), acc.get("Ham"));
    assert_eq!(Some(1.0), acc.overall());
    assert_eq!(3, acc.n_examples());
}


#[test]
fn all_wrong_predictions() {
    let tree = toy_tree();
    let data = vec![
        FeatureVector::new("buy"),
        FeatureVector::new("hello"),
        FeatureVector::new("friend"),
    ];
    let labels = ["Ham", "Spam", "Spam"];

    let acc = tree.accuracy(&data, &labels).unwrap();
    assert_eq!(Some(0.0), acc.get("Spam"));
    assert_eq!(Some(0.0), acc.get("Ham"));
    assert_eq!(Some(0.0), acc.overall());
}


#[test]
fn mixed_predictions() {
    let tree = toy_tree();
    let data = vec![
        FeatureVector::new("buy"),
        FeatureVector::new("hello"),
        FeatureVector::new("buy it"),
        FeatureVector::new("friend"),
    ];
    let labels = ["Spam", "Spam", "Spam", "Ham"];

    let acc = tree.accuracy(&data, &labels).unwrap();
    let res = acc.to_map();
    let exp = [("Ham", 1.0), ("Overall", 0.75), ("Spam", 2.0 / 3.0)]
        .into_iter()
        .map(|(l, a)| (l.to_string(), a))
        .collect::<BTreeMap<_, _>>();
    assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
}


#[test]
fn mismatched_lengths_are_rejected() {
    let tree = toy_tree();
    let data = vec![
        FeatureVector::new("a"),
        FeatureVector::new("b"),
        FeatureVector::new("c"),
    ];
    let labels = ["Ham", "Spam"];

    let res = tree.accuracy(&data, &labels);
    assert!(matches!(res, Err(Error::InvalidInput(_))), "got {res:?}.");
}


#[test]
fn empty_tree_predicts_nothing_right() {
    let tree = DecisionTree::new();
    let data = vec![FeatureVector::new("buy")];

    let acc = tree.accuracy(&data, &["Spam"]).unwrap();
    assert_eq!(Some(0.0), acc.get("Spam"));
    assert_eq!(None, acc.get(""));
}


#[test]
fn empty_dataset_gives_empty_report() {
    let tree = toy_tree();
    let acc = tree.accuracy(&[], &[] as &[&str]).unwrap();
    assert_eq!(None, acc.overall());
    assert_eq!(0, acc.iter().count());
}


#[test]
fn classify_all_keeps_order() {
    let tree = toy_tree();
    let data = vec![
        FeatureVector::new("hello"),
        FeatureVector::new("now buy"),
        FeatureVector::new(""),
    ];
    let res = tree.classify_all(&data);
    let exp = vec!["Ham", "Spam", "Ham"];
    assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
}
