/**
 * Chat Module
 *
 * Backend-side integration with the external chat provider. The transport
 * itself is delegated to the provider; this module only issues the tokens
 * its SDK consumes.
 */

pub mod token;
