/// Turn a player slug into a display name.
///
/// `connor-mcdavid` -> `Connor McDavid`, `j-t-miller` -> `J.T. Miller`,
/// `o-reilly` -> `O'Reilly`. There is no authoritative name source behind the
/// slugs, so this is a fixed heuristic and it is lossy by nature.
pub fn slug_to_name(slug: &str) -> String {
    let segments: Vec<&str> = slug.split('-').filter(|s| !s.is_empty()).collect();
    let mut words = Vec::with_capacity(segments.len());
    let mut i = 0;

    while i < segments.len() {
        let segment = segments[i];

        if is_apostrophe_prefix(segment, segments.get(i + 1)) {
            words.push(format!("O'{}", capitalize(segments[i + 1])));
            i += 2;
            continue;
        }

        if is_single_char(segment) {
            let run = initials_run(&segments[i..]);
            words.push(join_initials(&segments[i..i + run]));
            i += run;
            continue;
        }

        words.push(capitalize_surname(segment));
        i += 1;
    }

    words.join(" ")
}

/// `o` followed by a full segment reads as an O' surname
fn is_apostrophe_prefix(segment: &str, next: Option<&&str>) -> bool {
    segment.eq_ignore_ascii_case("o") && next.is_some_and(|n| !is_single_char(n))
}

fn is_single_char(segment: &str) -> bool {
    segment.chars().count() == 1
}

fn initials_run(segments: &[&str]) -> usize {
    segments.iter().take_while(|s| is_single_char(s)).count()
}

fn join_initials(segments: &[&str]) -> String {
    let letters: Vec<String> = segments.iter().map(|s| s.to_uppercase()).collect();
    format!("{}.", letters.join("."))
}

fn capitalize_surname(segment: &str) -> String {
    let lower = segment.to_lowercase();

    if lower.starts_with("mc") && lower.chars().count() > 2 {
        return format!("Mc{}", capitalize(&segment[2..]));
    }
    if lower.starts_with("mac") && lower.chars().count() > 3 {
        return format!("Mac{}", capitalize(&segment[3..]));
    }

    capitalize(segment)
}

/// First character upper case, the rest lower case
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
