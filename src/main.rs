//! Small demo of the combinatorial generators.

use finset::prelude::*;
use finset::set;

fn main() {
    let a = set![1, 2, 3];
    let b = set![2, 3, 4];

    println!("A:       {a}");
    println!("B:       {b}");
    println!("A ∪ B:   {}", a.clone().union(b.clone()));
    println!("P(A):    {}", a.powerset());
    println!("A!:      {:?}", a.permutations());
    println!("A × B:   {:?}", cartesian_product(&[a.clone(), b.clone()]));
    println!("A ≅ B:   {}", is_bijective(&a, &b, |n| n + 1));
}
