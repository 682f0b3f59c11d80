/// Longest subarray with average >= `threshold`, checking every start and end.
fn variable_window_average_threshold(arr: &[i64], threshold: f64) -> &[i64] {
    let mut best = &arr[..0];

    for start in 0..arr.len() {
        let mut current_sum = 0;
        for end in start..arr.len() {
            current_sum += arr[end];
            let length = end - start + 1;
            let average = current_sum as f64 / length as f64;

            if average >= threshold && length > best.len() {
                best = &arr[start..=end];
            }
        }
    }

    best
}

fn main() {
    let arr = [1, 2, 3, 4, 5, 6, 7, 8];
    let threshold = 4.5;
    let result = variable_window_average_threshold(&arr, threshold);
    println!("Longest subarray with avg >= {threshold}: {result:?} (length: {})", result.len());
}
