use crate::domain::ports::TokenSource;

// Links handed back to whoever wants to track a location.
pub struct IssuedLink {
    pub token: String,
    pub share_link: String,
    pub result_link: String,
}

// Link issuing use case with injected dependencies.
pub struct IssueLinkUseCase<'a, T: ?Sized> {
    pub tokens: &'a T,
    // Public origin the links point at, e.g. `https://share.example.com`.
    pub base_url: &'a str,
}

impl<T> IssueLinkUseCase<'_, T>
where
    T: TokenSource + ?Sized,
{
    pub fn execute(&self) -> IssuedLink {
        let token = self.tokens.next_token();
        let base_url = self.base_url.trim_end_matches('/');

        IssuedLink {
            share_link: format!("{base_url}/share?id={token}"),
            result_link: format!("{base_url}/result/{token}"),
            token,
        }
    }
}
