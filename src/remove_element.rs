/// Compacts `seq` so that every value not equal to `target` sits at the front,
/// in its original order. Returns how many values were kept.
///
/// Slots from the returned index onwards keep whatever stale values they had.
pub fn remove_element<T: PartialEq + Copy>(seq: &mut [T], target: T) -> usize {
    let mut k = 0;
    for i in 0..seq.len() {
        if seq[i] != target {
            seq[k] = seq[i];
            k += 1;
        }
    }
    log::debug!("kept {k} of {} values", seq.len());
    k
}

/// Runs [`remove_element`] and hands back the kept prefix.
pub fn retained<T: PartialEq + Copy>(seq: &mut [T], target: T) -> &[T] {
    let k = remove_element(seq, target);
    &seq[..k]
}
