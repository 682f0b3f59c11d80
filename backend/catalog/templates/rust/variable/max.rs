/// Longest subarray satisfying `condition`, shrinking from the left while it fails.
fn longest_subarray_with_condition<F>(arr: &[i64], condition: F) -> &[i64]
where
    F: Fn(&[i64]) -> bool,
{
    let mut left = 0;
    let mut best = &arr[..0];

    for right in 0..arr.len() {
        while left <= right && !condition(&arr[left..=right]) {
            left += 1;
        }

        if left <= right && right - left + 1 > best.len() {
            best = &arr[left..=right];
        }
    }

    best
}

fn main() {
    let arr = [1, 2, 3, 4, 5, 6, 7, 8];
    // Longest subarray with sum <= 10
    let result = longest_subarray_with_condition(&arr, |window| window.iter().sum::<i64>() <= 10);
    println!("Longest subarray with sum <= 10: {result:?} (length: {})", result.len());
}
