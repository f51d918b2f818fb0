// src/noyau/normalise.rs
//
// Multiplication implicite : "2(3)" -> "2*(3)", "(1)(2)" -> "(1)*(2)", "(1)2" -> "(1)*2".
// La décision se prend sur le tampon de SORTIE : ")(" ne reçoit qu’un seul '*'.

/// Insère les '*' implicites. Ne valide rien, n’échoue jamais.
pub fn normalize(expression: &str) -> String {
    normalize_indexe(expression.chars().enumerate()).0
}

/// Comme `normalize`, sur des caractères accompagnés de leur position d’origine.
///
/// Renvoie aussi, pour chaque caractère de sortie, la position d’origine
/// correspondante ; un '*' inséré prend celle du caractère qui le suit.
pub fn normalize_indexe<I>(source: I) -> (String, Vec<usize>)
where
    I: IntoIterator<Item = (usize, char)>,
{
    let mut out = String::new();
    let mut origines: Vec<usize> = Vec::new();
    let mut chars = source.into_iter().peekable();

    while let Some((pos, c)) = chars.next() {
        if c == '(' {
            if let Some(prev) = out.chars().next_back() {
                if prev.is_ascii_digit() || prev == ')' {
                    out.push('*');
                    origines.push(pos);
                }
            }
        }

        out.push(c);
        origines.push(pos);

        if c == ')' {
            if let Some(&(pos_next, next)) = chars.peek() {
                if next.is_ascii_digit() || next == '(' {
                    out.push('*');
                    origines.push(pos_next);
                }
            }
        }
    }

    (out, origines)
}
