#![deny(missing_docs)]

//! # Redux Strategy
//!
//! Emits Redux action creators (thunks issuing requests through `axios`),
//! plain actions and action type constants.

use crate::strategies::traits::{
    ActionContext, ClientStrategy, FileContext, OutputFiles, ResourceNames,
};

/// Redux + axios implementation of [`ClientStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReduxStrategy;

impl ClientStrategy for ReduxStrategy {
    fn file_names(&self, stem: &str) -> OutputFiles {
        OutputFiles {
            creators: format!("{}ActionCreators.js", stem),
            types: format!("{}ActionTypes.js", stem),
            actions: format!("{}Actions.js", stem),
        }
    }

    fn creators_header(&self, ctx: &FileContext<'_>) -> String {
        format!(
            "// This module exports redux action creators for the {api} API hosted at {host}.\n\
             // Redux Thunk middleware or equivalent is required to use these action creators.\n\
             // It uses the axios javascript library for making the actual HTTP requests.\n\
             import axios from 'axios';\n\
             import * as actions from './{stem}Actions';\n",
            api = ctx.api_name,
            host = ctx.host,
            stem = ctx.stem,
        )
    }

    fn action_creator(&self, ctx: &ActionContext<'_>) -> String {
        let names = ctx.names;
        let params = ctx.action.sorted_query_params();
        let has_payload = ctx.action.payload.is_some();

        let mut doc = String::new();
        doc.push_str(&format!(
            "// {} calls the {} action of the {} resource.\n",
            names.creator, ctx.action.name, ctx.resource.name
        ));
        if let Some(description) = &ctx.action.description {
            for line in description.lines().filter(|l| !l.trim().is_empty()) {
                doc.push_str(&format!("// {}\n", line.trim()));
            }
        }
        doc.push_str("// url is the request url, the format is:\n");
        doc.push_str(&format!("// {}\n", ctx.url));
        doc.push_str(
            "// Optional handleError and handleSuccess functions can be provided for the promise\n\
             // if needed in addition to the redux actions.\n\
             // Standard or custom headers can be passed in like this in the options:\n\
             // { headers: {'X-My-Custom-Header': 'Header-Value'} }\n",
        );
        if has_payload {
            doc.push_str("// data contains the action payload (request body)\n");
        }
        doc.push_str(
            "// The options object will take precedence over default values for timeout, etc.\n\
             // This function returns a promise which dispatches an error if the HTTP response is a 4xx or 5xx.\n",
        );
        if !params.is_empty() {
            let verb = if params.len() > 1 { "are" } else { "is" };
            doc.push_str(&format!(
                "//\n// Query Parameters: {} {} expected in params.\n",
                params.join(", "),
                verb
            ));
        }
        doc.push_str("// Params should be passed in the options object.\n");

        let data_arg = if has_payload { ", data" } else { "" };
        let data_field = if has_payload { "      data,\n" } else { "" };

        format!(
            "\n{doc}\
             export const {creator} = (url, options{data_arg}, handleSuccess, handleError) =>\n\
             \x20 dispatch => {{\n\
             \x20   dispatch(actions.request{pascal}());\n\
             \x20   return axios({{\n\
             \x20     timeout: {timeout},\n\
             \x20     url,\n\
             \x20     method: '{method}',\n\
             {data_field}\
             \x20     responseType: 'json',\n\
             \x20     ...options\n\
             \x20   }})\n\
             \x20     .then(response => {{\n\
             \x20       dispatch(actions.receive{pascal}Success(response.data, response.status));\n\
             \x20     }})\n\
             \x20     .then(response => {{\n\
             \x20       if (handleSuccess) {{\n\
             \x20         handleSuccess(response);\n\
             \x20       }}\n\
             \x20     }})\n\
             \x20     .catch(error => {{\n\
             \x20       let rdata;\n\
             \x20       let rstatus;\n\
             \x20       if (error.response) {{\n\
             \x20         rdata = error.response.data;\n\
             \x20         rstatus = error.response.status;\n\
             \x20       }}\n\
             \x20       dispatch(actions.receive{pascal}Error(rdata, rstatus));\n\
             \x20       throw error;\n\
             \x20     }})\n\
             \x20     .catch(error => {{\n\
             \x20       if (handleError) {{\n\
             \x20         handleError(error);\n\
             \x20       }}\n\
             \x20     }});\n\
             \x20 }};\n",
            creator = names.creator,
            pascal = names.pascal,
            timeout = ctx.timeout_ms,
            method = ctx.method,
        )
    }

    fn actions_header(&self, ctx: &FileContext<'_>) -> String {
        format!(
            "// This module exports redux actions for the {api} API hosted at {host}.\n\
             import * as types from './{stem}ActionTypes';\n\n",
            api = ctx.api_name,
            host = ctx.host,
            stem = ctx.stem,
        )
    }

    fn actions(&self, ctx: &ActionContext<'_>) -> String {
        format!(
            "export const request{p} = () => ({{\n\
             \x20 type: types.REQ_{c}\n\
             }});\n\
             export const receive{p}Success = (data, status) => ({{\n\
             \x20 type: types.RCV_{c}_SUCCESS,\n\
             \x20 data,\n\
             \x20 status\n\
             }});\n\
             export const receive{p}Error = (data, status) => ({{\n\
             \x20 type: types.RCV_{c}_ERROR,\n\
             \x20 data,\n\
             \x20 status\n\
             }});\n",
            p = ctx.names.pascal,
            c = ctx.names.constant,
        )
    }

    fn action_types_header(&self, ctx: &FileContext<'_>) -> String {
        format!(
            "// This module exports redux action types for the {api} API hosted at {host}.\n\n",
            api = ctx.api_name,
            host = ctx.host,
        )
    }

    fn action_types(&self, ctx: &ActionContext<'_>) -> String {
        let c = &ctx.names.constant;
        format!(
            "export const REQ_{c} = 'REQ_{c}';\n\
             export const RCV_{c}_SUCCESS = 'RCV_{c}_SUCCESS';\n\
             export const RCV_{c}_ERROR = 'RCV_{c}_ERROR';\n"
        )
    }

    fn reset_action(&self, names: &ResourceNames) -> String {
        format!(
            "export const reset{p} = () => ({{\n\
             \x20 type: types.{c}_RESET\n\
             }});\n",
            p = names.pascal,
            c = names.constant,
        )
    }

    fn reset_action_type(&self, names: &ResourceNames) -> String {
        format!("export const {c}_RESET = '{c}_RESET';\n", c = names.constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{ActionDefinition, ResourceDefinition, RouteDefinition};
    use crate::naming::Canonicalizer;
    use crate::strategies::traits::ActionNames;
    use pretty_assertions::assert_eq;

    fn resource() -> ResourceDefinition {
        ResourceDefinition {
            name: "bottle".into(),
            base_path: "/bottles".into(),
            parent: None,
            canonical_action: "show".into(),
            actions: vec![],
        }
    }

    fn action(payload: bool, params: &[&str]) -> ActionDefinition {
        ActionDefinition {
            name: "list".into(),
            description: None,
            routes: vec![RouteDefinition {
                verb: "GET".into(),
                path: String::new(),
            }],
            payload: payload.then(|| "Payload".to_string()),
            query_params: params.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn render<F>(payload: bool, params: &[&str], f: F) -> String
    where
        F: Fn(&ActionContext<'_>) -> String,
    {
        let c = Canonicalizer::javascript();
        let names = ActionNames::derive(&c, "list", "bottles");
        let res = resource();
        let act = action(payload, params);
        let ctx = ActionContext {
            names: &names,
            action: &act,
            resource: &res,
            url: "http://localhost:8081/cellar/bottles".into(),
            method: "get".into(),
            timeout_ms: 20000,
        };
        f(&ctx)
    }

    #[test]
    fn test_file_names() {
        let files = ReduxStrategy.file_names("cellar");
        assert_eq!(files.creators, "cellarActionCreators.js");
        assert_eq!(files.types, "cellarActionTypes.js");
        assert_eq!(files.actions, "cellarActions.js");
    }

    #[test]
    fn test_actions() {
        let out = render(false, &[], |ctx| ReduxStrategy.actions(ctx));
        let expected = "export const requestListBottles = () => ({
  type: types.REQ_LIST_BOTTLES
});
export const receiveListBottlesSuccess = (data, status) => ({
  type: types.RCV_LIST_BOTTLES_SUCCESS,
  data,
  status
});
export const receiveListBottlesError = (data, status) => ({
  type: types.RCV_LIST_BOTTLES_ERROR,
  data,
  status
});
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_action_types() {
        let out = render(false, &[], |ctx| ReduxStrategy.action_types(ctx));
        assert_eq!(
            out,
            "export const REQ_LIST_BOTTLES = 'REQ_LIST_BOTTLES';\n\
             export const RCV_LIST_BOTTLES_SUCCESS = 'RCV_LIST_BOTTLES_SUCCESS';\n\
             export const RCV_LIST_BOTTLES_ERROR = 'RCV_LIST_BOTTLES_ERROR';\n"
        );
    }

    #[test]
    fn test_action_creator_without_payload() {
        let out = render(false, &["years"], |ctx| ReduxStrategy.action_creator(ctx));
        let expected = "
// listBottles calls the list action of the bottle resource.
// url is the request url, the format is:
// http://localhost:8081/cellar/bottles
// Optional handleError and handleSuccess functions can be provided for the promise
// if needed in addition to the redux actions.
// Standard or custom headers can be passed in like this in the options:
// { headers: {'X-My-Custom-Header': 'Header-Value'} }
// The options object will take precedence over default values for timeout, etc.
// This function returns a promise which dispatches an error if the HTTP response is a 4xx or 5xx.
//
// Query Parameters: years is expected in params.
// Params should be passed in the options object.
export const listBottles = (url, options, handleSuccess, handleError) =>
  dispatch => {
    dispatch(actions.requestListBottles());
    return axios({
      timeout: 20000,
      url,
      method: 'get',
      responseType: 'json',
      ...options
    })
      .then(response => {
        dispatch(actions.receiveListBottlesSuccess(response.data, response.status));
      })
      .then(response => {
        if (handleSuccess) {
          handleSuccess(response);
        }
      })
      .catch(error => {
        let rdata;
        let rstatus;
        if (error.response) {
          rdata = error.response.data;
          rstatus = error.response.status;
        }
        dispatch(actions.receiveListBottlesError(rdata, rstatus));
        throw error;
      })
      .catch(error => {
        if (handleError) {
          handleError(error);
        }
      });
  };
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_action_creator_with_payload_and_params() {
        let out = render(true, &["years", "color"], |ctx| ReduxStrategy.action_creator(ctx));
        assert!(out.contains("// data contains the action payload (request body)\n"));
        assert!(out.contains("// Query Parameters: color, years are expected in params.\n"));
        assert!(out.contains("(url, options, data, handleSuccess, handleError) =>"));
        assert!(out.contains("      method: 'get',\n      data,\n      responseType: 'json',"));
    }

    #[test]
    fn test_action_creator_description_lines() {
        let c = Canonicalizer::javascript();
        let names = ActionNames::derive(&c, "list", "bottles");
        let res = resource();
        let mut act = action(false, &[]);
        act.description = Some("List all bottles\n\n  in the account  \n".into());
        let ctx = ActionContext {
            names: &names,
            action: &act,
            resource: &res,
            url: "http://localhost:8081/cellar/bottles".into(),
            method: "get".into(),
            timeout_ms: 20000,
        };
        let out = ReduxStrategy.action_creator(&ctx);
        assert!(out.starts_with(
            "\n// listBottles calls the list action of the bottle resource.\n\
             // List all bottles\n\
             // in the account\n\
             // url is the request url, the format is:\n\
             // http://localhost:8081/cellar/bottles\n"
        ));
    }

    #[test]
    fn test_headers() {
        let ctx = FileContext {
            api_name: "cellar",
            host: "localhost:8081",
            stem: "bottle",
        };
        let creators = ReduxStrategy.creators_header(&ctx);
        assert!(creators.starts_with(
            "// This module exports redux action creators for the cellar API hosted at localhost:8081.\n"
        ));
        assert!(creators.ends_with("import * as actions from './bottleActions';\n"));
        assert_eq!(
            ReduxStrategy.actions_header(&ctx),
            "// This module exports redux actions for the cellar API hosted at localhost:8081.\n\
             import * as types from './bottleActionTypes';\n\n"
        );
    }

    #[test]
    fn test_reset() {
        let c = Canonicalizer::javascript();
        let names = ResourceNames::derive(&c, "bottles");
        assert_eq!(
            ReduxStrategy.reset_action_type(&names),
            "export const BOTTLES_RESET = 'BOTTLES_RESET';\n"
        );
        assert_eq!(
            ReduxStrategy.reset_action(&names),
            "export const resetBottles = () => ({\n  type: types.BOTTLES_RESET\n});\n"
        );
    }
}
