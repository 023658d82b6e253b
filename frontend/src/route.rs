use yew::{html, Html};
use yew_router::prelude::*;

use crate::components::cadastro::CadastroPage;
use crate::components::consulta::ConsultaPage;

/// Client-side routes of the application.
///
/// Navigation between pages goes through `Link<Route>` and never reloads the
/// document; the static host answers a direct load of either path with
/// `index.html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Consulta,
    #[at("/cadastrar_fornecedor")]
    CadastrarFornecedor,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Renders the page of `route`.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Consulta => html! { <ConsultaPage /> },
        Route::CadastrarFornecedor => html! { <CadastroPage /> },
        Route::NotFound => html! {
            <div style="text-align:center;color:#fff;padding:2rem;">
                <h1>{ "Página não encontrada" }</h1>
                <Link<Route> to={Route::Consulta} classes="nav-link">{ "Voltar para a busca" }</Link<Route>>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Consulta));
        assert_eq!(
            Route::recognize("/cadastrar_fornecedor"),
            Some(Route::CadastrarFornecedor)
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        let route = Route::recognize("/fornecedores").or_else(Route::not_found_route);
        assert_eq!(route, Some(Route::NotFound));
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Consulta, Route::CadastrarFornecedor] {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }
}
