/// First subarray summing to `target`, scanning left to right.
fn variable_window_sum_target(arr: &[i64], target: i64) -> Option<&[i64]> {
    let mut left = 0;
    let mut current_sum = 0;

    for right in 0..arr.len() {
        current_sum += arr[right];

        // Shrink while the sum overshoots
        while current_sum > target && left <= right {
            current_sum -= arr[left];
            left += 1;
        }

        if current_sum == target && left <= right {
            return Some(&arr[left..=right]);
        }
    }

    None
}

fn main() {
    let arr = [1, 2, 3, 4, 5, 6, 7, 8];
    let target = 15;
    let result = variable_window_sum_target(&arr, target);
    println!("Subarray with sum {target}: {result:?}");
}
